//! The closed catalog of pictograms that can be shown next to a transaction.

use serde::{Deserialize, Serialize};

/// A recognised icon name.
///
/// Transaction data refers to icons by name. Names outside the catalog resolve
/// to [IconKind::Receipt], so every transaction always has a renderable icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[allow(missing_docs)]
pub enum IconKind {
    CreditCard,
    Zap,
    Smartphone,
    TrendingUp,
    Wallet,
    #[default]
    Receipt,
    Users,
    Heart,
    GraduationCap,
    Briefcase,
    Home,
    Coffee,
    Globe,
    AlertTriangle,
    FileText,
    BarChart3,
    PiggyBank,
    Target,
    ShoppingCart,
    Flame,
    Music,
    ShieldCheck,
    ScanLine,
    ArrowUpRight,
    ArrowDownLeft,
}

impl IconKind {
    /// Every icon in the catalog.
    pub const ALL: [IconKind; 25] = [
        Self::CreditCard,
        Self::Zap,
        Self::Smartphone,
        Self::TrendingUp,
        Self::Wallet,
        Self::Receipt,
        Self::Users,
        Self::Heart,
        Self::GraduationCap,
        Self::Briefcase,
        Self::Home,
        Self::Coffee,
        Self::Globe,
        Self::AlertTriangle,
        Self::FileText,
        Self::BarChart3,
        Self::PiggyBank,
        Self::Target,
        Self::ShoppingCart,
        Self::Flame,
        Self::Music,
        Self::ShieldCheck,
        Self::ScanLine,
        Self::ArrowUpRight,
        Self::ArrowDownLeft,
    ];

    /// Resolve an icon name, falling back to [IconKind::Receipt].
    ///
    /// Matching is exact, i.e. case-sensitive.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|icon| icon.name() == name)
            .unwrap_or_default()
    }

    /// The catalog name of the icon.
    pub fn name(self) -> &'static str {
        match self {
            Self::CreditCard => "CreditCard",
            Self::Zap => "Zap",
            Self::Smartphone => "Smartphone",
            Self::TrendingUp => "TrendingUp",
            Self::Wallet => "Wallet",
            Self::Receipt => "Receipt",
            Self::Users => "Users",
            Self::Heart => "Heart",
            Self::GraduationCap => "GraduationCap",
            Self::Briefcase => "Briefcase",
            Self::Home => "Home",
            Self::Coffee => "Coffee",
            Self::Globe => "Globe",
            Self::AlertTriangle => "AlertTriangle",
            Self::FileText => "FileText",
            Self::BarChart3 => "BarChart3",
            Self::PiggyBank => "PiggyBank",
            Self::Target => "Target",
            Self::ShoppingCart => "ShoppingCart",
            Self::Flame => "Flame",
            Self::Music => "Music",
            Self::ShieldCheck => "ShieldCheck",
            Self::ScanLine => "ScanLine",
            Self::ArrowUpRight => "ArrowUpRight",
            Self::ArrowDownLeft => "ArrowDownLeft",
        }
    }

    /// The glyph rendered for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::CreditCard => "💳",
            Self::Zap => "⚡",
            Self::Smartphone => "📱",
            Self::TrendingUp => "📈",
            Self::Wallet => "👛",
            Self::Receipt => "🧾",
            Self::Users => "👥",
            Self::Heart => "❤",
            Self::GraduationCap => "🎓",
            Self::Briefcase => "💼",
            Self::Home => "🏠",
            Self::Coffee => "☕",
            Self::Globe => "🌐",
            Self::AlertTriangle => "⚠",
            Self::FileText => "📄",
            Self::BarChart3 => "📊",
            Self::PiggyBank => "🐷",
            Self::Target => "🎯",
            Self::ShoppingCart => "🛒",
            Self::Flame => "🔥",
            Self::Music => "🎵",
            Self::ShieldCheck => "🛡",
            Self::ScanLine => "🔍",
            Self::ArrowUpRight => "↗",
            Self::ArrowDownLeft => "↙",
        }
    }
}

impl From<String> for IconKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<IconKind> for String {
    fn from(icon: IconKind) -> Self {
        icon.name().to_owned()
    }
}
