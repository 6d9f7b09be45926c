//! One module per region. Each exposes `process(input, ctx) -> RegionResult`
//! and writes only the context fields its region owns.

pub(crate) mod amygdala;
pub(crate) mod anterior;
pub(crate) mod auditory;
pub(crate) mod hippocampus;
pub(crate) mod limbic;
pub(crate) mod motor;
pub(crate) mod prefrontal;
pub(crate) mod visual;
