//! タグ → スタイルクラスの対応表

/// 既知のタグ分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagClass {
    Fighter,
    Tank,
    Mage,
    Assassin,
    Support,
    Marksman,
}

impl TagClass {
    pub const ALL: [TagClass; 6] = [
        TagClass::Fighter,
        TagClass::Tank,
        TagClass::Mage,
        TagClass::Assassin,
        TagClass::Support,
        TagClass::Marksman,
    ];

    /// タグ文字列から分類を取得（大文字小文字を無視）
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.css_class().eq_ignore_ascii_case(tag))
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TagClass::Fighter => "fighter",
            TagClass::Tank => "tank",
            TagClass::Mage => "mage",
            TagClass::Assassin => "assassin",
            TagClass::Support => "support",
            TagClass::Marksman => "marksman",
        }
    }

    /// 上流データ上の表記（タグフィルタに渡す値）
    pub fn raw_tag(&self) -> &'static str {
        match self {
            TagClass::Fighter => "Fighter",
            TagClass::Tank => "Tank",
            TagClass::Mage => "Mage",
            TagClass::Assassin => "Assassin",
            TagClass::Support => "Support",
            TagClass::Marksman => "Marksman",
        }
    }
}

/// タグのスタイルクラス。未知のタグは空文字
pub fn type_class(tag: &str) -> &'static str {
    TagClass::from_tag(tag).map_or("", |class| class.css_class())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_class_known() {
        assert_eq!(type_class("fighter"), "fighter");
        assert_eq!(type_class("marksman"), "marksman");
        assert_eq!(type_class("Mage"), "mage");
    }

    #[test]
    fn test_type_class_unknown() {
        assert_eq!(type_class("jungler"), "");
        assert_eq!(type_class(""), "");
    }

    #[test]
    fn test_raw_tag_matches_css_class() {
        for class in TagClass::ALL {
            assert_eq!(class.raw_tag().to_lowercase(), class.css_class());
            assert_eq!(TagClass::from_tag(class.raw_tag()), Some(class));
        }
    }
}
