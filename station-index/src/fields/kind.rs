//! Record keys and the field kind each one selects.

use std::fmt;

/// Key whose value becomes the station's cross-reference link.
pub const LINK_KEY: &str = "rwh";

/// Administrative classification attached to a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminCode {
    B,
    Bm,
    BUndV,
    Bw,
    Bww,
    E,
    F,
    FGp,
    G,
    Gp,
    K,
    M,
    Ol,
    /// Carries no visible label.
    Unlabelled,
    S,
    V,
    Vb,
    W,
}

impl AdminCode {
    /// The label written in front of the value.
    pub fn label(self) -> &'static str {
        match self {
            AdminCode::B => "B",
            AdminCode::Bm => "Bm",
            AdminCode::BUndV => "B und V",
            AdminCode::Bw => "Bw",
            AdminCode::Bww => "Bww",
            AdminCode::E => "E",
            AdminCode::F => "F",
            AdminCode::FGp => "F/Gp",
            AdminCode::G => "G",
            AdminCode::Gp => "Gp",
            AdminCode::K => "K",
            AdminCode::M => "M",
            AdminCode::Ol => "Ol",
            AdminCode::Unlabelled => "",
            AdminCode::S => "S",
            AdminCode::V => "V",
            AdminCode::Vb => "Vb",
            AdminCode::W => "W",
        }
    }
}

impl fmt::Display for AdminCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which token of a number pair is set in bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emphasis {
    #[default]
    None,
    First,
    Second,
}

/// The parse and render behaviour selected by a record key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Text,
    AdminStatus(AdminCode),
    NumberPair(Emphasis),
    SaarNumber,
    Range,
    PostRange,
    ReducedService,
    Limit,
    See,
    SeeAlso,
    Hidden,
}

impl FieldKind {
    /// Look up a lowercased, trimmed key.
    ///
    /// # Examples
    ///
    /// ```
    /// use station_index::fields::{AdminCode, Emphasis, FieldKind};
    ///
    /// assert_eq!(FieldKind::from_key("name"), Some(FieldKind::Name));
    /// assert_eq!(FieldKind::from_key("bv"), Some(FieldKind::AdminStatus(AdminCode::BUndV)));
    /// assert_eq!(FieldKind::from_key("rnr"), Some(FieldKind::NumberPair(Emphasis::First)));
    /// assert_eq!(FieldKind::from_key("zzz"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        let kind = match key {
            "name" => FieldKind::Name,
            "extra" | "karte" | "multi" | "strecke" | "uebergang" => FieldKind::Text,
            "b" => FieldKind::AdminStatus(AdminCode::B),
            "bm" => FieldKind::AdminStatus(AdminCode::Bm),
            "bv" => FieldKind::AdminStatus(AdminCode::BUndV),
            "bw" => FieldKind::AdminStatus(AdminCode::Bw),
            "bww" => FieldKind::AdminStatus(AdminCode::Bww),
            "e" => FieldKind::AdminStatus(AdminCode::E),
            "f" => FieldKind::AdminStatus(AdminCode::F),
            "fgp" => FieldKind::AdminStatus(AdminCode::FGp),
            "g" => FieldKind::AdminStatus(AdminCode::G),
            "gp" => FieldKind::AdminStatus(AdminCode::Gp),
            "k" => FieldKind::AdminStatus(AdminCode::K),
            "m" => FieldKind::AdminStatus(AdminCode::M),
            "ol" => FieldKind::AdminStatus(AdminCode::Ol),
            "ra" => FieldKind::AdminStatus(AdminCode::Unlabelled),
            "s" => FieldKind::AdminStatus(AdminCode::S),
            "v" => FieldKind::AdminStatus(AdminCode::V),
            "vb" => FieldKind::AdminStatus(AdminCode::Vb),
            "w" => FieldKind::AdminStatus(AdminCode::W),
            "nr" => FieldKind::NumberPair(Emphasis::None),
            "rnr" => FieldKind::NumberPair(Emphasis::First),
            "pnr" => FieldKind::NumberPair(Emphasis::Second),
            "snr" => FieldKind::SaarNumber,
            "rang" => FieldKind::Range,
            "prang" => FieldKind::PostRange,
            "kleinb" => FieldKind::ReducedService,
            "limit" => FieldKind::Limit,
            "siehe" => FieldKind::See,
            "sieheauch" => FieldKind::SeeAlso,
            "rwh" | "cz-name" => FieldKind::Hidden,
            _ => return None,
        };
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_keys_share_kind() {
        for key in ["extra", "karte", "multi", "strecke", "uebergang"] {
            assert_eq!(FieldKind::from_key(key), Some(FieldKind::Text), "{key}");
        }
    }

    #[test]
    fn admin_labels() {
        let cases = [
            ("b", "B"),
            ("bm", "Bm"),
            ("bv", "B und V"),
            ("bw", "Bw"),
            ("bww", "Bww"),
            ("e", "E"),
            ("f", "F"),
            ("fgp", "F/Gp"),
            ("g", "G"),
            ("gp", "Gp"),
            ("k", "K"),
            ("m", "M"),
            ("ol", "Ol"),
            ("ra", ""),
            ("s", "S"),
            ("v", "V"),
            ("vb", "Vb"),
            ("w", "W"),
        ];
        for (key, label) in cases {
            match FieldKind::from_key(key) {
                Some(FieldKind::AdminStatus(code)) => assert_eq!(code.label(), label),
                other => panic!("{key} mapped to {other:?}"),
            }
        }
    }

    #[test]
    fn number_pair_emphasis() {
        assert_eq!(
            FieldKind::from_key("nr"),
            Some(FieldKind::NumberPair(Emphasis::None))
        );
        assert_eq!(
            FieldKind::from_key("rnr"),
            Some(FieldKind::NumberPair(Emphasis::First))
        );
        assert_eq!(
            FieldKind::from_key("pnr"),
            Some(FieldKind::NumberPair(Emphasis::Second))
        );
    }

    #[test]
    fn hidden_keys() {
        assert_eq!(FieldKind::from_key(LINK_KEY), Some(FieldKind::Hidden));
        assert_eq!(FieldKind::from_key("cz-name"), Some(FieldKind::Hidden));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        // Callers lowercase the key before looking it up.
        assert_eq!(FieldKind::from_key("Name"), None);
        assert_eq!(FieldKind::from_key(""), None);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(AdminCode::FGp.to_string(), "F/Gp");
        assert_eq!(AdminCode::Unlabelled.to_string(), "");
    }
}
