// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tracewalk_viewport --heading-base-level=0

//! Tracewalk Viewport: ownership of the pan/zoom transform over the
//! floor canvas.
//!
//! The canvas transform is `translate(x, y) scale(k)` with a uniform,
//! bounded scale. This crate holds the single writer of that transform,
//! [`ViewportController`], and the pure fit math underneath it:
//!
//! - [`ViewTransform`]: the transform value itself, with scale clamped
//!   into [`MIN_SCALE`]`..=`[`MAX_SCALE`] at every construction site.
//! - [`fit`]: frame a world-space content box inside the padded window,
//!   substituting a 200-unit span for degenerate axes so a single point
//!   still centers sensibly.
//! - [`ViewportController`]: drag-to-pan and scroll/pinch-to-zoom via
//!   `ui-events`, a queue of [`CentralizeRequest`] commands resolved
//!   against a content box sampled at resolution time, and a debounced
//!   refit after window resizes.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use tracewalk_viewport::{fit, Padding};
//!
//! let t = fit(
//!     Rect::new(0.0, 0.0, 400.0, 300.0),
//!     Size::new(1000.0, 800.0),
//!     Padding::uniform(100.0),
//! )
//! .unwrap();
//! assert_eq!(t.k, 2.0);
//! ```

mod controller;
mod fit;
mod transform;

pub use controller::{
    CentralizeOutcome, CentralizeRequest, CentralizeTarget, ViewportController, RESIZE_DEBOUNCE,
};
pub use fit::{fit, Padding};
pub use transform::{ViewTransform, MAX_SCALE, MIN_SCALE};
