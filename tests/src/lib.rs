//! Cross-crate checks of the subnet arithmetic: randomized properties of the
//! engine and end-to-end pool scenarios driven the way an IPAM controller uses it.

mod allocation {
    mod properties;
    mod scenarios;
}
