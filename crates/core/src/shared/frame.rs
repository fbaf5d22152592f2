use ndarray::{ArrayView3, ArrayViewMut3};

use crate::shared::color::Rgb;
use crate::shared::size::Size;

const CHANNELS: usize = 3;

/// One rendered overlay image: contiguous RGB bytes in row-major order.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * CHANNELS,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// A frame of the given size with every pixel set to `color`.
    pub fn filled(size: Size, color: Rgb) -> Self {
        let pixels = (size.width as usize) * (size.height as usize);
        let data = color.to_array().repeat(pixels);
        Self::new(data, size.width, size.height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let arr = self.as_ndarray();
        let (row, col) = (y as usize, x as usize);
        Some(Rgb::new(
            arr[[row, col, 0]],
            arr[[row, col, 1]],
            arr[[row, col, 2]],
        ))
    }

    /// Writes one pixel; coordinates outside the frame are ignored.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let (row, col) = (y as usize, x as usize);
        let mut arr = self.as_ndarray_mut();
        arr[[row, col, 0]] = color.r;
        arr[[row, col, 1]] = color.g;
        arr[[row, col, 2]] = color.b;
    }

    pub fn fill(&mut self, color: Rgb) {
        for px in self.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&color.to_array());
        }
    }

    /// Copies pixels from `other`, which must have identical dimensions.
    pub fn copy_from(&mut self, other: &Frame) {
        debug_assert_eq!(self.size(), other.size(), "frames must share dimensions");
        self.data.copy_from_slice(&other.data);
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }
}
