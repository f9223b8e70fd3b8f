// Copyright (c) 2026 The vk-handle-shim developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Vulkan declarations for vendor SDK bindings that are built without the Vulkan SDK.
//!
//! Vendor libraries such as NVIDIA NGX (DLSS) take Vulkan handles and a few Vulkan structs in
//! their C API. Bindings to them need those types declared with exactly the layout the Vulkan
//! headers give them, including the one target-dependent part of that layout:
//!
//! - *Dispatchable* handles ([`VkInstance`], [`VkPhysicalDevice`], [`VkDevice`],
//!   [`VkCommandBuffer`]) are pointers to opaque structs on every target.
//!
//! - *Non-dispatchable* handles ([`VkBuffer`], [`VkImage`], [`VkImageView`]) are pointers to
//!   opaque structs on targets with 64-bit pointers, and `u64`s everywhere else. In the second
//!   case they are all the same type and convert into each other without a cast, as they do in
//!   C.
//!
//! The choice is made by the build script using the same rule as the Vulkan headers, evaluated
//! for the target being compiled. It can be forced by setting the `VK_USE_64_BIT_PTR_DEFINES`
//! environment variable to `1` (pointers) or `0` (integers) during the build; any other value
//! fails the build. [`HANDLE_REPR`] reports what was selected.
//!
//! Bindings to more handles can be declared with [`define_handle!`] and
//! [`define_non_dispatchable_handle!`], which follow the same selection.
//!
//! The types convert to and from their [`ash`] counterparts through [`AbiHandle`] and `From`.

#![allow(non_camel_case_types)]

pub use ash::vk::Handle;
pub use extensions::{ExtensionError, RequiredExtensions};
pub use handles::*;
pub use target::{
    detect, parse_override, select_null_sentinel, HandleRepr, NullSentinel, OverrideError,
    TargetCfg, TargetSignals,
};
pub use types::*;

#[macro_use]
mod macros;
pub mod extensions;
pub mod handles;
pub mod target;
pub mod types;

/// The representation of non-dispatchable handles selected for this build.
#[cfg(vk_ptr64_handles)]
pub const HANDLE_REPR: HandleRepr = HandleRepr::Pointer;

/// The representation of non-dispatchable handles selected for this build.
#[cfg(not(vk_ptr64_handles))]
pub const HANDLE_REPR: HandleRepr = HandleRepr::Integer;

/// The form [`VK_NULL_HANDLE`] takes in this build. Rust always has a typed null pointer.
pub const NULL_SENTINEL: NullSentinel = select_null_sentinel(Some(HANDLE_REPR), true);

const _: () = {
    use std::mem::size_of;

    match HANDLE_REPR {
        HandleRepr::Pointer => assert!(size_of::<VkBuffer>() == size_of::<usize>()),
        HandleRepr::Integer => assert!(size_of::<VkBuffer>() == 8),
    }

    assert!(size_of::<VkInstance>() == size_of::<usize>());
    assert!(size_of::<VkImageSubresourceRange>() == 20);
};
