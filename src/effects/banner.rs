const BANNER: &str = "
%c██████╗ ███████╗███████╗██████╗ ███████╗███████╗███╗   ██╗███████╗███████╗
%c██╔══██╗██╔════╝██╔════╝██╔══██╗██╔════╝██╔════╝████╗  ██║██╔════╝██╔════╝
%c██║  ██║█████╗  █████╗  ██████╔╝███████╗█████╗  ██╔██╗ ██║███████╗█████╗
%c██║  ██║██╔══╝  ██╔══╝  ██╔═══╝ ╚════██║██╔══╝  ██║╚██╗██║╚════██║██╔══╝
%c██████╔╝███████╗███████╗██║     ███████║███████╗██║ ╚████║███████║███████╗
%c╚═════╝ ╚══════╝╚══════╝╚═╝     ╚══════╝╚══════╝╚═╝  ╚═══╝╚══════╝╚══════╝
";

/// Red fading to pink, one per banner line.
const LINE_STYLES: [&str; 6] = [
    "color: #ff1a1a",
    "color: #ff3333",
    "color: #ff4d4d",
    "color: #ff6666",
    "color: #ff8080",
    "color: #ff9999",
];

pub fn print() {
    let [a, b, c, d, e, f] = LINE_STYLES;
    gloo_console::log!(BANNER, a, b, c, d, e, f);
    gloo_console::log!(
        "%cSee something broken? Tell us in the community server.",
        "color: #888; font-size: 14px; font-family: monospace;"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_style_per_banner_line() {
        assert_eq!(BANNER.matches("%c").count(), LINE_STYLES.len());
    }
}
