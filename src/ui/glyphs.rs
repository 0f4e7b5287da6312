#[derive(Clone, Copy, Debug)]
pub struct Glyphs {
    pub menu_cursor: &'static str,
    pub menu_blank: &'static str,
    pub input_cursor: &'static str,
    pub h_separator: &'static str,
    pub arrow_right: &'static str,
    pub arrow_up: &'static str,
}

pub fn select(fancy_requested: bool) -> Glyphs {
    if fancy_requested {
        fancy()
    } else {
        ascii()
    }
}

fn ascii() -> Glyphs {
    Glyphs {
        menu_cursor: "> ",
        menu_blank: "  ",
        input_cursor: "_",
        h_separator: "-",
        arrow_right: "->",
        arrow_up: "^",
    }
}

fn fancy() -> Glyphs {
    Glyphs {
        menu_cursor: "▶ ",
        menu_blank: "  ",
        input_cursor: "█",
        h_separator: "─",
        arrow_right: "→",
        arrow_up: "↑",
    }
}
