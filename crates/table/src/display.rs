//! Display configuration passed explicitly down the render chain.

/// Presentation preferences for one rendering session.
///
/// Carried as a plain value rather than ambient global state so the
/// fetch and pagination core stays free of UI coupling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    pub dark_mode: bool,
}
