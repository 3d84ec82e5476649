//! Load configuration.

/// What to do with a face corner that omits its texcoord or normal index
/// (`v`, `v/vt`, `v//vn`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingComponents {
    /// Fail the load with `UnsupportedCornerForm`.
    #[default]
    Reject,
    /// Write zeros into the missing slot; the record stride is unchanged.
    ZeroFill,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub missing_components: MissingComponents,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_components(mut self, policy: MissingComponents) -> Self {
        self.missing_components = policy;
        self
    }

    /// Shorthand for `Reject` (`true`) or `ZeroFill` (`false`).
    pub fn strict(self, strict: bool) -> Self {
        self.with_missing_components(if strict {
            MissingComponents::Reject
        } else {
            MissingComponents::ZeroFill
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rejects_missing_components() {
        assert_eq!(
            LoadOptions::default().missing_components,
            MissingComponents::Reject
        );
        assert_eq!(
            LoadOptions::new().strict(false).missing_components,
            MissingComponents::ZeroFill
        );
    }
}
