// Copyright (c) 2026 The vk-handle-shim developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

// The exported macros are defined twice and picked by the cfg of *this* crate, so that a
// downstream crate invoking them gets the representation selected by our build script rather
// than evaluating the cfg against its own configuration.

/// Declares a dispatchable handle: a pointer to an opaque struct, on every target.
///
/// ```
/// vk_handle_shim::define_handle!(VkQueue, VkQueue_T);
///
/// let queue: VkQueue = std::ptr::null_mut();
/// assert!(queue.is_null());
/// ```
#[macro_export]
macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $opaque:ident) => {
        #[allow(non_camel_case_types)]
        #[repr(C)]
        pub struct $opaque {
            _data: [u8; 0],
            _marker: ::core::marker::PhantomData<(*mut u8, ::core::marker::PhantomPinned)>,
        }

        $(#[$meta])*
        pub type $name = *mut $opaque;
    };
}

/// Declares a non-dispatchable handle.
///
/// This build selected the pointer representation: the handle is a pointer to an opaque struct,
/// distinct from every other handle type.
#[cfg(vk_ptr64_handles)]
#[macro_export]
macro_rules! define_non_dispatchable_handle {
    ($(#[$meta:meta])* $name:ident, $opaque:ident) => {
        #[allow(non_camel_case_types)]
        #[repr(C)]
        pub struct $opaque {
            _data: [u8; 0],
            _marker: ::core::marker::PhantomData<(*mut u8, ::core::marker::PhantomPinned)>,
        }

        $(#[$meta])*
        pub type $name = *mut $opaque;
    };
}

/// Declares a non-dispatchable handle.
///
/// This build selected the integer representation: the handle is a `u64`, and all
/// non-dispatchable handles are the same type. No opaque struct is declared.
#[cfg(not(vk_ptr64_handles))]
#[macro_export]
macro_rules! define_non_dispatchable_handle {
    ($(#[$meta:meta])* $name:ident, $opaque:ident) => {
        $(#[$meta])*
        pub type $name = u64;
    };
}

// Implements `AbiHandle` for `ash` handles whose declaration here is a pointer.
macro_rules! impl_abi_handle_pointer {
    ($($ash:ident => $abi:ident,)+) => {
        $(
            impl AbiHandle for ash::vk::$ash {
                type Abi = $abi;

                #[inline]
                fn into_abi(self) -> $abi {
                    self.as_raw() as usize as $abi
                }

                #[inline]
                fn from_abi(abi: $abi) -> Self {
                    Self::from_raw(abi as usize as u64)
                }
            }
        )+
    };
}

// Implements `AbiHandle` for `ash` handles whose declaration here is a `u64`.
#[cfg(not(vk_ptr64_handles))]
macro_rules! impl_abi_handle_integer {
    ($($ash:ident => $abi:ident,)+) => {
        $(
            impl AbiHandle for ash::vk::$ash {
                type Abi = $abi;

                #[inline]
                fn into_abi(self) -> $abi {
                    self.as_raw()
                }

                #[inline]
                fn from_abi(abi: $abi) -> Self {
                    Self::from_raw(abi)
                }
            }
        )+
    };
}
