/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Visibility flag sent to `flickr.photos.setPerms`
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PrivacyType {
    No = 0,
    Yes = 1,
}

impl Default for PrivacyType {
    fn default() -> Self {
        Self::No
    }
}

impl From<bool> for PrivacyType {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum SortOrder {
    DatePostedAsc,
    DatePostedDesc,
    DateTakenAsc,
    DateTakenDesc,
    InterestingnessDesc,
    InterestingnessAsc,
    Relevance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum MediaFilter {
    All,
    Photos,
    Videos,
}

/// Size suffixes used by the `url_*`, `width_*` and `height_*` search extras
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum SizeSuffix {
    /// Square 75
    Sq,
    /// Thumbnail, 100 on longest side
    T,
    /// Small, 240 on longest side
    S,
    /// Large square 150
    Q,
    /// Medium, 500 on longest side
    M,
    /// Small, 320 on longest side
    N,
    /// Medium 640
    Z,
    /// Medium 800
    C,
    /// Large 1024
    L,
    /// Original
    O,
}
