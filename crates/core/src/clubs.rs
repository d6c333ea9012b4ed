//! Racing club registry.
//!
//! Static lookup from the short club codes used on posts to full display
//! names and the CSS class token clients use for tag styling. Codes absent
//! from the registry are not an error: the code is displayed verbatim and
//! styled with [`DEFAULT_STYLE_CLASS`].

use serde::Serialize;

/// One registered racing club.
#[derive(Debug, Clone, Serialize)]
pub struct Club {
    /// Short code as submitted on posts.
    pub code: &'static str,
    /// Full club name for display.
    pub display_name: &'static str,
    /// CSS class token for tag styling.
    pub style_class: &'static str,
}

/// Style class for codes not present in the registry.
pub const DEFAULT_STYLE_CLASS: &str = "default";

/// All registered clubs.
pub const CLUBS: &[Club] = &[
    Club { code: "サンデーR", display_name: "サンデーレーシング", style_class: "sunday" },
    Club { code: "社台RH", display_name: "社台レースホース", style_class: "shadai" },
    Club { code: "G1レーシング", display_name: "G1レーシング", style_class: "g1" },
    Club { code: "キャロット", display_name: "キャロットクラブ", style_class: "carrot" },
    Club { code: "シルク", display_name: "シルクホースクラブ", style_class: "silk" },
    Club { code: "DMMバヌーシー", display_name: "DMMバヌーシー", style_class: "dmm" },
    Club { code: "東サラ", display_name: "東京サラブレッドクラブ", style_class: "tokyo-tc" },
    Club { code: "ノルマンディー", display_name: "ノルマンディーOC", style_class: "normandy" },
    Club { code: "ウイン", display_name: "ウインレーシングクラブ", style_class: "win" },
    Club { code: "ラフィアン", display_name: "ラフィアンターフマンクラブ", style_class: "ruffian" },
    Club { code: "ロード", display_name: "ロードホースクラブ", style_class: "lord" },
    Club { code: "広尾", display_name: "広尾サラブレッド倶楽部", style_class: "hiroo" },
    Club { code: "YGG", display_name: "YGGオーナーズクラブ", style_class: "ygg" },
    Club { code: "ライオン", display_name: "サラブレッドクラブライオン", style_class: "lion" },
    Club { code: "グリーン", display_name: "グリーンファーム愛馬会", style_class: "green" },
    Club { code: "友駿", display_name: "友駿ホースクラブ", style_class: "yushun" },
    Club { code: "ユニオン", display_name: "ユニオンオーナーズクラブ", style_class: "union" },
    Club { code: "ターファイト", display_name: "ターファイトクラブ", style_class: "turfite" },
    Club { code: "ローレル", display_name: "ローレルクラブ", style_class: "laurel" },
    Club { code: "大樹", display_name: "大樹レーシングクラブ", style_class: "taiki" },
    Club { code: "ワラウカド", display_name: "ワラウカド", style_class: "waraukado" },
    Club { code: "インゼル", display_name: "インゼルサラブレッドクラブ", style_class: "insel" },
    Club { code: "京サラ", display_name: "京都サラブレッドクラブ", style_class: "kyoto-tc" },
    Club { code: "バゴバゴ", display_name: "その他・個人等", style_class: "other" },
];

/// Look up a club by its short code.
pub fn find(code: &str) -> Option<&'static Club> {
    CLUBS.iter().find(|c| c.code == code)
}

/// Full display name for a code, or the code itself if unregistered.
pub fn display_name(code: &str) -> &str {
    match find(code) {
        Some(club) => club.display_name,
        None => code,
    }
}

/// Style class token for a code, or [`DEFAULT_STYLE_CLASS`] if unregistered.
pub fn style_class(code: &str) -> &'static str {
    match find(code) {
        Some(club) => club.style_class,
        None => DEFAULT_STYLE_CLASS,
    }
}

/// The whole registry, for serving to clients.
pub fn all() -> &'static [Club] {
    CLUBS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_club_display_name() {
        assert_eq!(display_name("サンデーR"), "サンデーレーシング");
        assert_eq!(display_name("キャロット"), "キャロットクラブ");
    }

    #[test]
    fn registered_club_style_class() {
        assert_eq!(style_class("サンデーR"), "sunday");
        assert_eq!(style_class("京サラ"), "kyoto-tc");
    }

    #[test]
    fn unknown_code_displays_verbatim() {
        assert_eq!(display_name("未知"), "未知");
    }

    #[test]
    fn unknown_code_gets_default_style() {
        assert_eq!(style_class("未知"), DEFAULT_STYLE_CLASS);
    }

    #[test]
    fn registry_has_expected_size() {
        assert_eq!(CLUBS.len(), 24);
    }

    #[test]
    fn codes_are_unique() {
        for (i, a) in CLUBS.iter().enumerate() {
            for b in &CLUBS[i + 1..] {
                assert_ne!(a.code, b.code, "duplicate club code {}", a.code);
            }
        }
    }
}
