// Copyright 2026 the DTIF Math Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Where fitted content sits inside the container.
///
/// Both modes use the same contain scale; they differ only in how the
/// leftover space is distributed. This mode is consulted by
/// [`crate::ContainFit::compute`] and [`crate::fit_viewport_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FitMode {
    /// Split the leftover space evenly on the shorter axis.
    ///
    /// This is what [`crate::fit_viewport`] uses.
    #[default]
    Center,
    /// Put all leftover space after the content, so the content origin maps
    /// to the container origin.
    AlignMin,
}
