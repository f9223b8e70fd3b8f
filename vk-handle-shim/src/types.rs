// Copyright (c) 2026 The vk-handle-shim developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

use bytemuck::{Pod, Zeroable};

/// A `VkFormat` value. Declared as an integer so that the enumeration table is not needed.
pub type VkFormat = u32;

pub type VkFlags = u32;

/// Bitmask of `VkImageAspectFlagBits`.
pub type VkImageAspectFlags = VkFlags;

pub const VK_IMAGE_ASPECT_COLOR_BIT: VkImageAspectFlags =
    ash::vk::ImageAspectFlags::COLOR.as_raw();
pub const VK_IMAGE_ASPECT_DEPTH_BIT: VkImageAspectFlags =
    ash::vk::ImageAspectFlags::DEPTH.as_raw();
pub const VK_IMAGE_ASPECT_STENCIL_BIT: VkImageAspectFlags =
    ash::vk::ImageAspectFlags::STENCIL.as_raw();

pub const VK_REMAINING_MIP_LEVELS: u32 = ash::vk::REMAINING_MIP_LEVELS;
pub const VK_REMAINING_ARRAY_LAYERS: u32 = ash::vk::REMAINING_ARRAY_LAYERS;

/// Converts an `ash` format to its integer declaration.
#[inline]
pub const fn format_from_ash(format: ash::vk::Format) -> VkFormat {
    format.as_raw() as VkFormat
}

/// Converts an integer format declaration back to an `ash` format.
#[inline]
pub const fn format_to_ash(format: VkFormat) -> ash::vk::Format {
    ash::vk::Format::from_raw(format as i32)
}

/// The mip levels and array layers of an image that a view or a command accesses.
#[allow(non_snake_case)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct VkImageSubresourceRange {
    pub aspectMask: VkImageAspectFlags,
    pub baseMipLevel: u32,
    pub levelCount: u32,
    pub baseArrayLayer: u32,
    pub layerCount: u32,
}

impl VkImageSubresourceRange {
    #[inline]
    pub const fn new(
        aspect_mask: VkImageAspectFlags,
        base_mip_level: u32,
        level_count: u32,
        base_array_layer: u32,
        layer_count: u32,
    ) -> Self {
        VkImageSubresourceRange {
            aspectMask: aspect_mask,
            baseMipLevel: base_mip_level,
            levelCount: level_count,
            baseArrayLayer: base_array_layer,
            layerCount: layer_count,
        }
    }

    /// Returns a range covering every mip level and array layer of the given aspects.
    #[inline]
    pub const fn whole(aspect_mask: VkImageAspectFlags) -> Self {
        Self::new(
            aspect_mask,
            0,
            VK_REMAINING_MIP_LEVELS,
            0,
            VK_REMAINING_ARRAY_LAYERS,
        )
    }
}

impl From<ash::vk::ImageSubresourceRange> for VkImageSubresourceRange {
    #[inline]
    fn from(val: ash::vk::ImageSubresourceRange) -> Self {
        VkImageSubresourceRange {
            aspectMask: val.aspect_mask.as_raw(),
            baseMipLevel: val.base_mip_level,
            levelCount: val.level_count,
            baseArrayLayer: val.base_array_layer,
            layerCount: val.layer_count,
        }
    }
}

impl From<VkImageSubresourceRange> for ash::vk::ImageSubresourceRange {
    #[inline]
    fn from(val: VkImageSubresourceRange) -> Self {
        ash::vk::ImageSubresourceRange {
            aspect_mask: ash::vk::ImageAspectFlags::from_raw(val.aspectMask),
            base_mip_level: val.baseMipLevel,
            level_count: val.levelCount,
            base_array_layer: val.baseArrayLayer,
            layer_count: val.layerCount,
        }
    }
}
