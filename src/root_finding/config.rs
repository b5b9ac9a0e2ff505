//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the default error margin and iteration cap
//! used by every root-finding config.
//!
//! [`CommonCfg`] — universal fields
//! ├ `eps`      : error margin on |f(x)|
//! └ `max_iter` : iteration ceiling
//!
//! `max_iter = 0` is accepted: algorithms run no iterations and fall
//! straight through to their shortfall path.


pub const DEFAULT_EPS      : f64   = 1e-6;
pub const DEFAULT_MAX_ITER : usize = 100;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    eps:      f64,
    max_iter: usize,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            eps      : DEFAULT_EPS,
            max_iter : DEFAULT_MAX_ITER,
        }
    }

    // getters
    pub fn eps(&self)      -> f64   { self.eps }
    pub fn max_iter(&self) -> usize { self.max_iter }

    // setters (internal)
    pub(crate) fn with_eps      (&mut self, v: f64)   { self.eps      = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = v; }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_eps(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidEps { got: v }
                    );
                }
                self.common.with_eps(v);
                Ok(self)
            }

            /// `0` is allowed: the algorithm runs no iterations and
            /// reports an iteration-limit shortfall.
            #[must_use]
            pub fn set_max_iter(mut self, v: usize) -> Self {
                self.common.with_max_iter(v);
                self
            }
        }
    };
}
pub(crate) use impl_common_cfg;
