// Copyright (c) 2026 The vk-handle-shim developers
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Extension lists the NGX runtime asks the application to enable.
//!
//! NGX reports the instance and device extensions it needs as a count and an array of C
//! strings. Some of the names it reports have since been promoted: NGX asks for
//! `VK_EXT_buffer_device_address`, but also works with `VK_KHR_buffer_device_address`, which
//! is the one drivers are expected to expose. [`RequiredExtensions`] applies that substitution
//! and keeps the names alive for as long as the create info that points at them.

use std::{
    error::Error,
    ffi::{c_char, CStr, CString},
    fmt, slice,
};

/// Extension names reported by NGX and the names to enable in their place.
const REPLACEMENTS: &[(&CStr, &CStr)] = &[(
    ash::ext::buffer_device_address::NAME,
    ash::khr::buffer_device_address::NAME,
)];

/// An owned list of extension names to enable, with promoted extensions substituted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequiredExtensions {
    names: Vec<CString>,
}

impl RequiredExtensions {
    /// Builds the list from extension names.
    ///
    /// Promoted extensions are replaced, and a name that is already in the list is skipped.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a CStr>) -> Self {
        let mut extensions = RequiredExtensions::default();

        for name in names {
            extensions.push(name);
        }

        extensions
    }

    /// Builds the list from the array returned by the NGX required extensions query.
    ///
    /// # Safety
    ///
    /// - If `count` is not zero and `names` is not null, `names` must point to `count`
    ///   consecutive pointers.
    /// - Each of these pointers that is not null must point to a nul-terminated string.
    pub unsafe fn from_raw(
        count: u32,
        names: *const *const c_char,
    ) -> Result<Self, ExtensionError> {
        if count == 0 {
            return Ok(RequiredExtensions::default());
        }

        if names.is_null() {
            return Err(ExtensionError::NullArray { count });
        }

        let names = unsafe { slice::from_raw_parts(names, count as usize) };
        let mut extensions = RequiredExtensions::default();

        for (index, &ptr) in names.iter().enumerate() {
            if ptr.is_null() {
                return Err(ExtensionError::NullName { index });
            }

            let name = unsafe { CStr::from_ptr(ptr) };

            if let Err(err) = name.to_str() {
                return Err(ExtensionError::InvalidUtf8 {
                    index,
                    valid_up_to: err.valid_up_to(),
                });
            }

            extensions.push(name);
        }

        Ok(extensions)
    }

    fn push(&mut self, name: &CStr) {
        let name = match REPLACEMENTS.iter().find(|&&(from, _)| from == name) {
            Some(&(from, to)) => {
                log::debug!("enabling {:?} in place of {:?}", to, from);
                to
            }
            None => name,
        };

        if self.contains(name) {
            log::debug!("extension {:?} is already in the list", name);
            return;
        }

        self.names.push(name.to_owned());
    }

    /// Returns the number of extensions in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether the list contains `name`.
    #[inline]
    pub fn contains(&self, name: &CStr) -> bool {
        self.names.iter().any(|n| n.as_c_str() == name)
    }

    /// Returns an iterator over the names in the list, in the order they were reported.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &CStr> + '_ {
        self.names.iter().map(CString::as_c_str)
    }

    /// Returns pointers to the names, for `ppEnabledExtensionNames`.
    ///
    /// The pointers are valid for as long as `self` is alive and not modified.
    pub fn as_ptrs(&self) -> Vec<*const c_char> {
        self.names.iter().map(|n| n.as_ptr()).collect()
    }
}

/// Error that can happen when reading the extension list returned by NGX.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtensionError {
    /// The count was not zero, but the array pointer was null.
    NullArray { count: u32 },

    /// An entry of the array was null.
    NullName { index: usize },

    /// An entry of the array was not valid UTF-8.
    InvalidUtf8 { index: usize, valid_up_to: usize },
}

impl Error for ExtensionError {}

impl fmt::Display for ExtensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionError::NullArray { count } => write!(
                f,
                "{} extensions were reported, but the name array is null",
                count,
            ),
            ExtensionError::NullName { index } => {
                write!(f, "the extension name at index {} is null", index)
            }
            ExtensionError::InvalidUtf8 { index, valid_up_to } => write!(
                f,
                "the extension name at index {} is not valid UTF-8 after byte {}",
                index, valid_up_to,
            ),
        }
    }
}
