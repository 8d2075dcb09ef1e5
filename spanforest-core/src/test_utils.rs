//! Shared test utilities for `spanforest-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanforest_test_support::profile::ProptestRunProfile;

/// Builds a proptest configuration from the shared run profile so every
/// suite honours `PROPTEST_CASES` and `SPANFOREST_PBT_FORK`.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
