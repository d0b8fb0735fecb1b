/*
MIT License with typyPRISM Attribution

Based on or developed using typyPRISM
Copyright (c) 2018 Tyler B. Martin and National Institute of Standards and Technology
All rights reserved.
*/

//! Post-processing calculations over a solved PRISM context
//!
//! These functions read the correlation fields of a [`Prism`](crate::Prism)
//! after an external solver has populated them. They require Fourier-space
//! data and will convert `direct_corr`/`omega` in place when handed
//! real-space fields; callers that want to keep control of the
//! representation should convert beforehand.
//!
//! Both calculations are derived for two-component systems. They run for
//! higher ranks, taking site pairs two at a time, but a warning is logged
//! because the generalization is unverified; the computed values are never
//! altered by the warning.

pub mod chi;
pub mod spinodal_condition;

pub use chi::chi;
pub use spinodal_condition::spinodal_condition;

pub(crate) const COMPONENT_WARNING: &str = "this calculation was derived for a two component \
system; interpret results for pairs of sites within a system of more than two components with \
caution";
