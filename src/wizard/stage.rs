use serde::Deserialize;
use std::fmt;

/// Stage content shipped with the page. Purely presentational.
const CATALOG_JSON: &str = include_str!("../../assets/stages.json");

/// One of the parallel stage sequences picked on the OS selection screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BranchId {
    Windows11,
    Windows10,
}

impl BranchId {
    pub const ALL: [BranchId; 2] = [BranchId::Windows11, BranchId::Windows10];

    /// Key used in `data-os` attributes and as the element id prefix.
    pub fn key(self) -> &'static str {
        match self {
            BranchId::Windows11 => "win11",
            BranchId::Windows10 => "win10",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|branch| branch.key() == key)
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A step inside a branch. `index` is zero based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StageId {
    pub branch: BranchId,
    pub index: usize,
}

impl StageId {
    pub fn new(branch: BranchId, index: usize) -> Self {
        Self { branch, index }
    }

    pub fn previous(self) -> Option<StageId> {
        self.index.checked_sub(1).map(|index| StageId::new(self.branch, index))
    }

    pub fn next(self) -> StageId {
        StageId::new(self.branch, self.index + 1)
    }
}

/// A region of the page shown exclusively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Container {
    RootSelect,
    Stage(StageId),
}

/// Element id prefix shared by everything a stage renders.
pub fn stage_prefix(branch: BranchId, slug: &str) -> String {
    format!("{}-{}", branch.key(), slug)
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StageDescriptor {
    pub slug: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub points: Vec<String>,
    pub modal_title: String,
    pub modal_body: String,
    pub acknowledgment: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub id: BranchId,
    pub label: String,
    pub description: String,
    pub stages: Vec<StageDescriptor>,
}

impl Branch {
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stage(&self, index: usize) -> Option<&StageDescriptor> {
        self.stages.get(index)
    }

    pub fn is_terminal(&self, index: usize) -> bool {
        index + 1 == self.stages.len()
    }
}

#[derive(Deserialize)]
struct RawCatalog {
    branches: Vec<RawBranch>,
}

#[derive(Deserialize)]
struct RawBranch {
    key: String,
    label: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    stages: Vec<StageDescriptor>,
}

/// Every branch the page knows about, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    branches: Vec<Branch>,
}

impl Catalog {
    #[cfg(test)]
    pub fn new(branches: Vec<Branch>) -> Self {
        Self { branches }
    }

    /// Parses a catalog document. Branches with an unknown key, no stages or
    /// a key seen earlier are dropped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let mut branches: Vec<Branch> = Vec::new();
        for raw_branch in raw.branches {
            let Some(id) = BranchId::from_key(&raw_branch.key) else {
                log::warn!("Skipping unknown branch '{}'", raw_branch.key);
                continue;
            };
            if raw_branch.stages.is_empty() || branches.iter().any(|b| b.id == id) {
                log::warn!("Skipping empty or duplicate branch '{}'", id);
                continue;
            }
            branches.push(Branch {
                id,
                label: raw_branch.label,
                description: raw_branch.description,
                stages: raw_branch.stages,
            });
        }
        Ok(Self { branches })
    }

    /// The catalog bundled into the binary; empty if it does not parse.
    pub fn bundled() -> Self {
        match Self::from_json(CATALOG_JSON) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Failed to parse stage catalog: {}", e);
                Self::default()
            }
        }
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn branch(&self, id: BranchId) -> Option<&Branch> {
        self.branches.iter().find(|branch| branch.id == id)
    }

    pub fn stage(&self, id: StageId) -> Option<&StageDescriptor> {
        self.branch(id.branch).and_then(|branch| branch.stage(id.index))
    }

    pub fn contains(&self, id: StageId) -> bool {
        self.stage(id).is_some()
    }

    pub fn is_terminal(&self, id: StageId) -> bool {
        self.branch(id.branch)
            .map(|branch| branch.is_terminal(id.index))
            .unwrap_or(false)
    }

    pub fn stage_ids(&self) -> impl Iterator<Item = StageId> + '_ {
        self.branches.iter().flat_map(|branch| {
            (0..branch.len()).map(move |index| StageId::new(branch.id, index))
        })
    }

    /// Element id prefix for a stage, e.g. `win11-requirements`.
    pub fn dom_prefix(&self, id: StageId) -> Option<String> {
        self.stage(id).map(|stage| stage_prefix(id.branch, &stage.slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn bundled_catalog_has_both_branches() {
        let catalog = Catalog::from_json(CATALOG_JSON).expect("bundled catalog parses");
        let ids: Vec<BranchId> = catalog.branches().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![BranchId::Windows11, BranchId::Windows10]);
        assert_eq!(catalog.branch(BranchId::Windows11).map(Branch::len), Some(5));
        assert_eq!(catalog.branch(BranchId::Windows10).map(Branch::len), Some(4));
    }

    #[test]
    fn bundled_slugs_are_unique_per_branch() {
        let catalog = Catalog::bundled();
        for branch in catalog.branches() {
            let slugs: HashSet<&str> = branch.stages.iter().map(|s| s.slug.as_str()).collect();
            assert_eq!(slugs.len(), branch.len(), "duplicate slug in {}", branch.id);
        }
    }

    #[test]
    fn unknown_empty_and_duplicate_branches_are_skipped() {
        let json = r#"{ "branches": [
            { "key": "mac", "label": "macOS", "stages": [] },
            { "key": "win10", "label": "Windows 10", "stages": [] },
            { "key": "win11", "label": "Windows 11", "stages": [
                { "slug": "a", "title": "A", "summary": "", "modal_title": "",
                  "modal_body": "", "acknowledgment": "" }
            ] },
            { "key": "win11", "label": "again", "stages": [
                { "slug": "b", "title": "B", "summary": "", "modal_title": "",
                  "modal_body": "", "acknowledgment": "" }
            ] }
        ] }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.branches().len(), 1);
        assert_eq!(catalog.branch(BranchId::Windows11).unwrap().label, "Windows 11");
        assert!(catalog.branch(BranchId::Windows10).is_none());
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(Catalog::from_json("{ \"branches\": 3 }").is_err());
    }

    #[test]
    fn terminal_and_prefix_lookup() {
        let catalog = Catalog::bundled();
        let last = StageId::new(BranchId::Windows10, 3);
        assert!(catalog.is_terminal(last));
        assert!(!catalog.is_terminal(StageId::new(BranchId::Windows10, 2)));
        assert!(!catalog.is_terminal(StageId::new(BranchId::Windows10, 9)));
        assert_eq!(
            catalog.dom_prefix(StageId::new(BranchId::Windows11, 0)).as_deref(),
            Some("win11-requirements")
        );
        assert_eq!(catalog.dom_prefix(StageId::new(BranchId::Windows11, 7)), None);
    }

    #[test]
    fn branch_keys_round_trip_and_reject_unknown() {
        for branch in BranchId::ALL {
            assert_eq!(BranchId::from_key(branch.key()), Some(branch));
        }
        assert_eq!(BranchId::from_key("linux"), None);
    }

    #[test]
    fn stage_neighbours() {
        let first = StageId::new(BranchId::Windows11, 0);
        assert_eq!(first.previous(), None);
        assert_eq!(first.next().previous(), Some(first));
    }
}
