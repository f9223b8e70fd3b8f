// Copyright (c) 2026 The vk-handle-shim developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Selection of the non-dispatchable handle representation.
//!
//! The Vulkan headers decide between a pointer and a `uint64_t` for non-dispatchable handles
//! by looking at a fixed list of compiler-predefined macros. This module is that decision in a
//! form that can be evaluated for an arbitrary target. The build script includes this file
//! directly and evaluates it for the target being compiled, so it must only use `std`.

use std::{error::Error, fmt};

/// Name of the environment variable that overrides the detected representation.
///
/// Mirrors the `VK_USE_64_BIT_PTR_DEFINES` macro of the Vulkan headers: `1` selects the pointer
/// representation, `0` the integer representation.
pub const OVERRIDE_VAR: &str = "VK_USE_64_BIT_PTR_DEFINES";

/// Name of the cfg emitted by the build script when the pointer representation is selected.
pub const POINTER_CFG: &str = "vk_ptr64_handles";

/// How non-dispatchable handles are represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleRepr {
    /// A distinct opaque pointer type per handle.
    Pointer,
    /// A `u64`, shared by every non-dispatchable handle.
    Integer,
}

impl HandleRepr {
    /// Returns the value `VK_USE_64_BIT_PTR_DEFINES` has for this representation.
    #[inline]
    pub const fn ptr_defines(self) -> u32 {
        match self {
            HandleRepr::Pointer => 1,
            HandleRepr::Integer => 0,
        }
    }
}

impl fmt::Display for HandleRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleRepr::Pointer => write!(f, "pointer"),
            HandleRepr::Integer => write!(f, "64-bit integer"),
        }
    }
}

/// The `cfg` values of a target that the detection depends on.
///
/// Field values use Cargo's spelling, as found in `CARGO_CFG_TARGET_*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetCfg<'a> {
    pub arch: &'a str,
    pub os: &'a str,
    pub env: &'a str,
    pub pointer_width: u32,
}

/// The compiler-predefined macros the Vulkan headers consult, one flag per macro.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TargetSignals {
    /// `__LP64__`
    pub lp64: bool,
    /// `_WIN64`
    pub win64: bool,
    /// `__x86_64__`
    pub x86_64: bool,
    /// `__ILP32__`
    pub ilp32: bool,
    /// `_M_X64`
    pub msvc_x64: bool,
    /// `__ia64` or `_M_IA64`
    pub ia64: bool,
    /// `__aarch64__`
    pub aarch64: bool,
    /// `__powerpc64__`
    pub powerpc64: bool,
}

impl TargetSignals {
    /// Derives the predefined macros a C compiler would set for the given target.
    pub fn from_cfg(cfg: &TargetCfg<'_>) -> Self {
        let ptr64 = cfg.pointer_width == 64;
        let windows = cfg.os == "windows";

        TargetSignals {
            // LLP64 on Windows, LP64 everywhere else.
            lp64: ptr64 && !windows,
            win64: ptr64 && windows,
            // Also set by the 32-bit-pointer ABIs (x32, arm64_32); `ilp32` tells those apart.
            x86_64: cfg.arch == "x86_64",
            ilp32: cfg.pointer_width == 32 && matches!(cfg.arch, "x86_64" | "aarch64"),
            msvc_x64: cfg.arch == "x86_64" && cfg.env == "msvc",
            ia64: cfg.arch == "ia64",
            aarch64: cfg.arch == "aarch64",
            powerpc64: cfg.arch == "powerpc64",
        }
    }

    /// Returns whether any signal selects the pointer representation.
    #[inline]
    pub const fn selects_pointer(&self) -> bool {
        self.lp64
            || self.win64
            || (self.x86_64 && !self.ilp32)
            || self.msvc_x64
            || self.ia64
            || self.aarch64
            || self.powerpc64
    }
}

/// Selects the handle representation. An explicit override always wins.
#[inline]
pub const fn detect(override_repr: Option<HandleRepr>, signals: &TargetSignals) -> HandleRepr {
    if let Some(repr) = override_repr {
        return repr;
    }

    if signals.selects_pointer() {
        HandleRepr::Pointer
    } else {
        HandleRepr::Integer
    }
}

/// Parses the value of [`OVERRIDE_VAR`].
pub fn parse_override(value: &str) -> Result<HandleRepr, OverrideError> {
    match value.trim() {
        "1" => Ok(HandleRepr::Pointer),
        "0" => Ok(HandleRepr::Integer),
        _ => Err(OverrideError::InvalidValue {
            value: value.to_owned(),
        }),
    }
}

/// Error returned by [`parse_override`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverrideError {
    /// The variable is set to something other than `0` or `1`.
    InvalidValue { value: String },
}

impl Error for OverrideError {}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverrideError::InvalidValue { value } => write!(
                f,
                "`{}` must be `0` or `1`, but it is set to `{}`",
                OVERRIDE_VAR, value,
            ),
        }
    }
}

/// The form the null handle takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NullSentinel {
    /// A typed null pointer literal (`nullptr`, `ptr::null_mut()`).
    TypedNullPointer,
    /// A zero cast to an untyped pointer (`(void*)0`).
    ZeroPointerCast,
    /// A zero `u64` (`0ULL`).
    ZeroU64,
    /// A plain zero, used when the handle macro was supplied from outside.
    Zero,
}

impl NullSentinel {
    /// Returns the bit pattern of the sentinel, widened to 64 bits.
    #[inline]
    pub fn bits(self) -> u64 {
        match self {
            NullSentinel::TypedNullPointer | NullSentinel::ZeroPointerCast => {
                std::ptr::null::<u8>() as usize as u64
            }
            NullSentinel::ZeroU64 | NullSentinel::Zero => 0,
        }
    }
}

/// Selects the null sentinel.
///
/// `repr` is `None` when the non-dispatchable handle definition came from outside, in which case
/// the plain zero fallback is used.
#[inline]
pub const fn select_null_sentinel(repr: Option<HandleRepr>, typed_null: bool) -> NullSentinel {
    match repr {
        Some(HandleRepr::Pointer) if typed_null => NullSentinel::TypedNullPointer,
        Some(HandleRepr::Pointer) => NullSentinel::ZeroPointerCast,
        Some(HandleRepr::Integer) => NullSentinel::ZeroU64,
        None => NullSentinel::Zero,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(
        arch: &'static str,
        os: &'static str,
        env: &'static str,
        width: u32,
    ) -> TargetCfg<'static> {
        TargetCfg {
            arch,
            os,
            env,
            pointer_width: width,
        }
    }

    #[test]
    fn known_targets() {
        use HandleRepr::*;

        let table = [
            ("x86_64-unknown-linux-gnu", target("x86_64", "linux", "gnu", 64), Pointer),
            ("x86_64-pc-windows-msvc", target("x86_64", "windows", "msvc", 64), Pointer),
            ("x86_64-pc-windows-gnu", target("x86_64", "windows", "gnu", 64), Pointer),
            ("x86_64-apple-darwin", target("x86_64", "macos", "", 64), Pointer),
            ("x86_64-unknown-linux-gnux32", target("x86_64", "linux", "gnu", 32), Integer),
            ("i686-unknown-linux-gnu", target("x86", "linux", "gnu", 32), Integer),
            ("i686-pc-windows-msvc", target("x86", "windows", "msvc", 32), Integer),
            ("aarch64-linux-android", target("aarch64", "android", "", 64), Pointer),
            ("aarch64-pc-windows-msvc", target("aarch64", "windows", "msvc", 64), Pointer),
            ("arm64_32-apple-watchos", target("aarch64", "watchos", "", 32), Pointer),
            ("armv7-linux-androideabi", target("arm", "android", "", 32), Integer),
            ("powerpc64le-unknown-linux-gnu", target("powerpc64", "linux", "gnu", 64), Pointer),
            ("powerpc-unknown-linux-gnu", target("powerpc", "linux", "gnu", 32), Integer),
            ("riscv64gc-unknown-linux-gnu", target("riscv64", "linux", "gnu", 64), Pointer),
            ("wasm32-unknown-unknown", target("wasm32", "unknown", "", 32), Integer),
        ];

        for (triple, cfg, expected) in table {
            let signals = TargetSignals::from_cfg(&cfg);
            assert_eq!(detect(None, &signals), expected, "{}", triple);
        }
    }

    #[test]
    fn each_signal_alone() {
        let base = TargetSignals::default();
        assert_eq!(detect(None, &base), HandleRepr::Integer);

        let pointer_signals: [fn(&mut TargetSignals); 7] = [
            |s| s.lp64 = true,
            |s| s.win64 = true,
            |s| s.x86_64 = true,
            |s| s.msvc_x64 = true,
            |s| s.ia64 = true,
            |s| s.aarch64 = true,
            |s| s.powerpc64 = true,
        ];

        for set in pointer_signals {
            let mut signals = base;
            set(&mut signals);
            assert_eq!(detect(None, &signals), HandleRepr::Pointer, "{:?}", signals);
        }

        let ilp32_only = TargetSignals {
            ilp32: true,
            ..base
        };
        assert_eq!(detect(None, &ilp32_only), HandleRepr::Integer);
    }

    #[test]
    fn ilp32_only_masks_x86_64() {
        let x32 = TargetSignals {
            x86_64: true,
            ilp32: true,
            ..Default::default()
        };
        assert_eq!(detect(None, &x32), HandleRepr::Integer);

        // `_M_X64` is not masked by `__ILP32__`.
        let x32_msvc = TargetSignals {
            msvc_x64: true,
            ..x32
        };
        assert_eq!(detect(None, &x32_msvc), HandleRepr::Pointer);

        let arm64_32 = TargetSignals {
            aarch64: true,
            ilp32: true,
            ..Default::default()
        };
        assert_eq!(detect(None, &arm64_32), HandleRepr::Pointer);
    }

    #[test]
    fn exhaustive_signal_combinations() {
        for bits in 0u32..(1 << 8) {
            let bit = |n: u32| bits & (1 << n) != 0;
            let signals = TargetSignals {
                lp64: bit(0),
                win64: bit(1),
                x86_64: bit(2),
                ilp32: bit(3),
                msvc_x64: bit(4),
                ia64: bit(5),
                aarch64: bit(6),
                powerpc64: bit(7),
            };

            // Only an all-clear set, or `__x86_64__` masked by `__ILP32__`, selects integers.
            let other = bits & !0b1100 != 0;
            let x86_64_pointer = bit(2) && !bit(3);
            let expected = if other || x86_64_pointer {
                HandleRepr::Pointer
            } else {
                HandleRepr::Integer
            };

            assert_eq!(detect(None, &signals), expected, "{:?}", signals);
        }
    }

    #[test]
    fn override_wins() {
        let x86_64 = TargetSignals::from_cfg(&target("x86_64", "linux", "gnu", 64));
        let i686 = TargetSignals::from_cfg(&target("x86", "linux", "gnu", 32));

        assert_eq!(detect(Some(HandleRepr::Integer), &x86_64), HandleRepr::Integer);
        assert_eq!(detect(Some(HandleRepr::Pointer), &i686), HandleRepr::Pointer);
    }

    #[test]
    fn parse_override_values() {
        assert_eq!(parse_override("1"), Ok(HandleRepr::Pointer));
        assert_eq!(parse_override("0"), Ok(HandleRepr::Integer));
        assert_eq!(parse_override(" 1\n"), Ok(HandleRepr::Pointer));

        for bad in ["", "2", "yes", "true"] {
            let err = parse_override(bad).unwrap_err();
            assert_eq!(
                err,
                OverrideError::InvalidValue {
                    value: bad.to_owned()
                }
            );
            assert!(err.to_string().contains(OVERRIDE_VAR));
        }
    }

    #[test]
    fn null_sentinel_selection() {
        use NullSentinel::*;

        assert_eq!(select_null_sentinel(Some(HandleRepr::Pointer), true), TypedNullPointer);
        assert_eq!(select_null_sentinel(Some(HandleRepr::Pointer), false), ZeroPointerCast);
        assert_eq!(select_null_sentinel(Some(HandleRepr::Integer), true), ZeroU64);
        assert_eq!(select_null_sentinel(Some(HandleRepr::Integer), false), ZeroU64);
        assert_eq!(select_null_sentinel(None, true), Zero);
        assert_eq!(select_null_sentinel(None, false), Zero);
    }

    #[test]
    fn null_sentinel_is_zero() {
        for sentinel in [
            NullSentinel::TypedNullPointer,
            NullSentinel::ZeroPointerCast,
            NullSentinel::ZeroU64,
            NullSentinel::Zero,
        ] {
            assert_eq!(sentinel.bits(), 0, "{:?}", sentinel);
        }
    }

    #[test]
    fn ptr_defines_value() {
        assert_eq!(HandleRepr::Pointer.ptr_defines(), 1);
        assert_eq!(HandleRepr::Integer.ptr_defines(), 0);
        assert_eq!(
            parse_override(&HandleRepr::Pointer.ptr_defines().to_string()),
            Ok(HandleRepr::Pointer),
        );
    }
}
