//! Core types for search result categorisation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed result categories shown on the search page.
///
/// The declaration order here is the display order: guides first, then the
/// Hack API reference, then the PHP API reference. The page renders headings
/// in exactly this order regardless of which provider answered first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResultCategory {
    /// Guides for the Hack language.
    HackGuides,
    /// Guides for the HHVM runtime.
    HhvmGuides,
    /// Hack API reference: classes.
    HackClasses,
    /// Hack API reference: traits.
    HackTraits,
    /// Hack API reference: interfaces.
    HackInterfaces,
    /// Hack API reference: functions.
    HackFunctions,
    /// PHP API reference: classes.
    PhpClasses,
    /// PHP API reference: functions.
    PhpFunctions,
}

impl ResultCategory {
    /// Returns the heading text shown on the search page for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HackGuides => "Hack Guides",
            Self::HhvmGuides => "HHVM Guides",
            Self::HackClasses => "Hack Classes",
            Self::HackTraits => "Hack Traits",
            Self::HackInterfaces => "Hack Interfaces",
            Self::HackFunctions => "Hack Functions",
            Self::PhpClasses => "PHP Classes",
            Self::PhpFunctions => "PHP Functions",
        }
    }

    /// Returns all categories in display order.
    pub fn all() -> &'static [ResultCategory] {
        &[
            Self::HackGuides,
            Self::HhvmGuides,
            Self::HackClasses,
            Self::HackTraits,
            Self::HackInterfaces,
            Self::HackFunctions,
            Self::PhpClasses,
            Self::PhpFunctions,
        ]
    }
}

impl fmt::Display for ResultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which documented product a guide belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideProduct {
    /// The Hack language.
    Hack,
    /// The HHVM runtime.
    Hhvm,
}

impl GuideProduct {
    /// Returns the URL path segment for this product.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Hack => "hack",
            Self::Hhvm => "hhvm",
        }
    }

    /// Returns the guide category this product's guides are listed under.
    pub fn category(&self) -> ResultCategory {
        match self {
            Self::Hack => ResultCategory::HackGuides,
            Self::Hhvm => ResultCategory::HhvmGuides,
        }
    }
}

impl fmt::Display for GuideProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
