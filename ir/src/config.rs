//! Constant folding configuration.
//!
//! Folding is on by default. It can be switched off for a whole process with
//! the `TESSERA_NOFOLD` environment variable, or for the current thread with
//! [`FoldConfig::scope`], which is how tests exercise the unfolded paths.

use std::cell::Cell;
use std::sync::OnceLock;

use bon::bon;

/// Controls the constant folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldConfig {
    /// Evaluate literal operands and eliminate algebraic identities.
    ///
    /// Divide-by-zero detection is not affected.
    pub fold_constants: bool,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self { fold_constants: true }
    }
}

#[bon]
impl FoldConfig {
    #[builder]
    pub fn new(#[builder(default = true)] fold_constants: bool) -> Self {
        Self { fold_constants }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `TESSERA_NOFOLD` - Disable constant folding if set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fold_constants = lookup("TESSERA_NOFOLD").is_none_or(|value| value == "0");
        Self { fold_constants }
    }

    /// Run `f` with this configuration active on the current thread.
    pub fn scope<R>(self, f: impl FnOnce() -> R) -> R {
        struct Restore(Option<FoldConfig>);

        impl Drop for Restore {
            fn drop(&mut self) {
                OVERRIDE.with(|cell| cell.set(self.0));
            }
        }

        let _restore = Restore(OVERRIDE.with(|cell| cell.replace(Some(self))));
        f()
    }
}

static GLOBAL: OnceLock<FoldConfig> = OnceLock::new();

thread_local! {
    static OVERRIDE: Cell<Option<FoldConfig>> = const { Cell::new(None) };
}

/// The configuration in effect on the current thread.
pub fn fold_config() -> FoldConfig {
    OVERRIDE.with(Cell::get).unwrap_or_else(|| *GLOBAL.get_or_init(FoldConfig::from_env))
}
