// Copyright (c) 2026 The vk-handle-shim developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Handle declarations used by the NGX Vulkan helpers.
//!
//! Dispatchable handles are always pointers. Non-dispatchable handles are pointers or `u64`s,
//! depending on [`HANDLE_REPR`](crate::HANDLE_REPR). Whichever was selected has to match the
//! Vulkan driver and the NGX library the program links against. Nothing can check that at
//! runtime: a mismatch shows up as corrupted arguments inside the driver.

use ash::vk::Handle;
use std::ptr;

define_non_dispatchable_handle!(
    /// Opaque handle to a buffer object.
    VkBuffer,
    VkBuffer_T
);
define_non_dispatchable_handle!(
    /// Opaque handle to an image object.
    VkImage,
    VkImage_T
);
define_handle!(
    /// Opaque handle to an instance object.
    VkInstance,
    VkInstance_T
);
define_handle!(
    /// Opaque handle to a physical device object.
    VkPhysicalDevice,
    VkPhysicalDevice_T
);
define_handle!(
    /// Opaque handle to a device object.
    VkDevice,
    VkDevice_T
);
define_handle!(
    /// Opaque handle to a command buffer object.
    VkCommandBuffer,
    VkCommandBuffer_T
);
define_non_dispatchable_handle!(
    /// Opaque handle to an image view object.
    VkImageView,
    VkImageView_T
);

/// The null handle.
///
/// An untyped null pointer when handles are pointers; cast it to the handle type with
/// [`pointer::cast`] or use [`NullHandle::NULL`] instead.
#[cfg(vk_ptr64_handles)]
pub const VK_NULL_HANDLE: *mut std::ffi::c_void = ptr::null_mut();

/// The null handle.
#[cfg(not(vk_ptr64_handles))]
pub const VK_NULL_HANDLE: u64 = 0;

/// A handle representation that has a null value.
pub trait NullHandle: Copy {
    /// The null value of this representation.
    const NULL: Self;

    /// Returns whether `self` is the null value.
    fn is_null_handle(self) -> bool;
}

impl<T> NullHandle for *mut T {
    const NULL: Self = ptr::null_mut();

    #[inline]
    fn is_null_handle(self) -> bool {
        self.is_null()
    }
}

impl NullHandle for u64 {
    const NULL: Self = 0;

    #[inline]
    fn is_null_handle(self) -> bool {
        self == 0
    }
}

/// Conversion between an `ash` handle and its declaration in this crate.
///
/// The raw value is carried over unchanged, so null maps to null.
pub trait AbiHandle: Handle {
    /// The declaration of this handle in this crate.
    type Abi: NullHandle;

    /// Converts to the declaration in this crate.
    fn into_abi(self) -> Self::Abi;

    /// Converts from the declaration in this crate.
    fn from_abi(abi: Self::Abi) -> Self;
}

impl_abi_handle_pointer! {
    Instance => VkInstance,
    PhysicalDevice => VkPhysicalDevice,
    Device => VkDevice,
    CommandBuffer => VkCommandBuffer,
}

#[cfg(vk_ptr64_handles)]
impl_abi_handle_pointer! {
    Buffer => VkBuffer,
    Image => VkImage,
    ImageView => VkImageView,
}

#[cfg(not(vk_ptr64_handles))]
impl_abi_handle_integer! {
    Buffer => VkBuffer,
    Image => VkImage,
    ImageView => VkImageView,
}
