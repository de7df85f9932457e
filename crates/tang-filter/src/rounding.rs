//! Scoped control of the floating-point rounding mode.
//!
//! The rounding mode is per-thread state of the C floating-point environment.
//! [`RoundingGuard`] sets a mode for as long as it lives and puts the previous
//! mode back when dropped, including while unwinding from a panic. The guard
//! is `!Send`: it restores the mode of the thread that created it.
//!
//! On targets without a supported `<fenv.h>` the guard does nothing and
//! [`rounding_mode`] always reports [`RoundingMode::ToNearest`].

use core::marker::PhantomData;

/// IEEE 754 rounding-direction attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    ToNearest,
    Downward,
    Upward,
    TowardZero,
}

#[cfg(all(
    unix,
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
mod fenv {
    use super::RoundingMode;
    use core::ffi::c_int;

    pub const SUPPORTED: bool = true;

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    mod consts {
        use core::ffi::c_int;
        pub const FE_TONEAREST: c_int = 0x000;
        pub const FE_DOWNWARD: c_int = 0x400;
        pub const FE_UPWARD: c_int = 0x800;
        pub const FE_TOWARDZERO: c_int = 0xc00;
    }

    // FPCR.RMode, bits 22-23
    #[cfg(target_arch = "aarch64")]
    mod consts {
        use core::ffi::c_int;
        pub const FE_TONEAREST: c_int = 0x00_0000;
        pub const FE_UPWARD: c_int = 0x40_0000;
        pub const FE_DOWNWARD: c_int = 0x80_0000;
        pub const FE_TOWARDZERO: c_int = 0xc0_0000;
    }

    use consts::*;

    #[cfg_attr(target_os = "linux", link(name = "m"))]
    unsafe extern "C" {
        fn fegetround() -> c_int;
        fn fesetround(round: c_int) -> c_int;
    }

    pub fn get() -> RoundingMode {
        // SAFETY: fegetround only reads the calling thread's control register.
        match unsafe { fegetround() } {
            FE_DOWNWARD => RoundingMode::Downward,
            FE_UPWARD => RoundingMode::Upward,
            FE_TOWARDZERO => RoundingMode::TowardZero,
            _ => RoundingMode::ToNearest,
        }
    }

    pub fn set(mode: RoundingMode) {
        let raw = match mode {
            RoundingMode::ToNearest => FE_TONEAREST,
            RoundingMode::Downward => FE_DOWNWARD,
            RoundingMode::Upward => FE_UPWARD,
            RoundingMode::TowardZero => FE_TOWARDZERO,
        };
        // SAFETY: `raw` is one of this target's FE_* constants; fesetround
        // only writes the calling thread's control register.
        let rc = unsafe { fesetround(raw) };
        debug_assert_eq!(rc, 0, "fesetround rejected {mode:?}");
    }
}

#[cfg(not(all(
    unix,
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
mod fenv {
    use super::RoundingMode;

    pub const SUPPORTED: bool = false;

    pub fn get() -> RoundingMode {
        RoundingMode::ToNearest
    }

    pub fn set(_mode: RoundingMode) {}
}

/// Whether this target lets the guard actually change the rounding mode.
pub const ROUNDING_CONTROL_SUPPORTED: bool = fenv::SUPPORTED;

/// Current rounding mode of the calling thread.
pub fn rounding_mode() -> RoundingMode {
    fenv::get()
}

/// Sets a rounding mode for its lifetime; restores the previous one on drop.
///
/// ```
/// use tang_filter::{rounding_mode, RoundingGuard};
///
/// let before = rounding_mode();
/// {
///     let _guard = RoundingGuard::upward();
///     // interval arithmetic runs here
/// }
/// assert_eq!(rounding_mode(), before);
/// ```
#[derive(Debug)]
#[must_use = "the rounding mode is restored as soon as the guard is dropped"]
pub struct RoundingGuard {
    saved: RoundingMode,
    // rounding mode is thread state; the guard must drop where it was created
    _thread: PhantomData<*const ()>,
}

impl RoundingGuard {
    /// Save the current mode and switch to `mode`.
    pub fn new(mode: RoundingMode) -> Self {
        let saved = fenv::get();
        if saved != mode {
            fenv::set(mode);
        }
        Self {
            saved,
            _thread: PhantomData,
        }
    }

    /// Save the current mode and round toward +∞.
    pub fn upward() -> Self {
        Self::new(RoundingMode::Upward)
    }

    /// The mode that will be restored on drop.
    pub fn saved(&self) -> RoundingMode {
        self.saved
    }
}

impl Drop for RoundingGuard {
    fn drop(&mut self) {
        fenv::set(self.saved);
    }
}
