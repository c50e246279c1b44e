/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Row-major traversal of a pixel grid.
//!
//! Both the encoder and the decoder walk pixels through [`scan`], so
//! the n-th pixel token of a frame always belongs to the same coordinate.
use core::iter::FusedIterator;

/// Iterator over the `(x, y)` coordinates of a `width` by `height` grid,
/// left to right then top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterScan {
    width:  usize,
    height: usize,
    next:   usize,
    end:    usize
}

/// Visit every pixel of a `width*height` grid in row-major order
///
/// # Example
/// ```
/// let coords: Vec<_> = morse_core::scan(2, 2).collect();
/// assert_eq!(coords, [(0, 0), (1, 0), (0, 1), (1, 1)]);
/// ```
pub fn scan(width: usize, height: usize) -> RasterScan {
    RasterScan::new(width, height)
}

impl RasterScan {
    /// Create a new scan, a grid with a zero side yields nothing
    pub fn new(width: usize, height: usize) -> RasterScan {
        let end = width.checked_mul(height).unwrap_or(0);

        RasterScan {
            width,
            height,
            next: 0,
            end
        }
    }
    /// Width of the grid being scanned
    pub const fn width(&self) -> usize {
        self.width
    }
    /// Height of the grid being scanned
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Coordinate of the pixel visited at step `index`
    ///
    /// Returns `None` when `index` is past the end of the grid
    pub fn coordinate(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.end {
            return None;
        }
        Some((index % self.width, index / self.width))
    }
}

impl Iterator for RasterScan {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let coord = self.coordinate(self.next)?;
        self.next += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next = self.next.saturating_add(n).min(self.end);
        self.next()
    }
}

impl ExactSizeIterator for RasterScan {}

impl FusedIterator for RasterScan {}
