//! Property-based tests for mirror name derivation.
//!
//! These tests use proptest to generate random URLs and verify that
//! `derive_name` behaves the same for every transport style.

#[cfg(test)]
mod proptest_tests {
    use crate::repository::derive_name;
    use proptest::prelude::*;

    proptest! {
        /// Property: trailing slashes never change the derived name
        #[test]
        fn trailing_slashes_are_ignored(
            owner in "[a-z0-9_-]{1,12}",
            repo in "[a-z0-9_.-]{0,12}[a-z0-9_-]",
            slashes in 0usize..4,
        ) {
            let url = format!("https://example.com/{}/{}", owner, repo);
            let slashed = format!("{}{}", url, "/".repeat(slashes));
            prop_assert_eq!(derive_name(&url), derive_name(&slashed));
        }

        /// Property: SCP-style and HTTPS-style URLs agree
        #[test]
        fn scp_and_https_agree(
            host in "[a-z]{1,10}\\.(com|org)",
            owner in "[a-z0-9_-]{1,12}",
            repo in "[a-z0-9_-]{1,12}",
        ) {
            let https = format!("https://{}/{}/{}", host, owner, repo);
            let scp = format!("git@{}:{}/{}.git", host, owner, repo);
            prop_assert_eq!(derive_name(&https), derive_name(&scp));
        }

        /// Property: the name always ends in exactly one `.git`
        #[test]
        fn name_ends_with_single_git_suffix(
            repo in "[a-z0-9_-]{1,12}",
            suffixed in any::<bool>(),
        ) {
            let segment = if suffixed { format!("{}.git", repo) } else { repo.clone() };
            let name = derive_name(&format!("https://example.com/owner/{}", segment));
            prop_assert_eq!(name, format!("{}.git", repo));
        }

        /// Property: the name never contains a path separator
        #[test]
        fn name_is_a_single_segment(url in "[A-Za-z0-9_:/@.-]{0,40}") {
            prop_assert!(!derive_name(&url).contains('/'));
        }
    }
}
