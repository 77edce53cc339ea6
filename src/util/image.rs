use thiserror::Error;
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_image::codecs::ImageFormat;

use crate::engine::Raster;

#[derive(Debug, Error)]
pub enum Error {
	#[error("failed to encode png: {0}")]
	Encode(String),
	#[error("failed to decode png: {0}")]
	Decode(String),
	#[error("decoded {len} bytes, expected {width}x{height} rgba")]
	UnexpectedLength { len: usize, width: u32, height: u32 },
}
use Error::*;

static_assertions::assert_impl_all!(Error: std::error::Error, Send, Sync);

pub type Result<T> = std::result::Result<T, Error>;

pub trait ImageExt: Sized {
	fn from_raster(raster: &Raster) -> Self;
	fn into_raster(self) -> Result<Raster>;

	fn convert_to_u8_subpixels(&mut self) -> Result<Vec<u8>>;
}

impl ImageExt for zune_image::image::Image {
	fn from_raster(raster: &Raster) -> Self {
		Self::from_u8(
			raster.data(),
			raster.width() as usize,
			raster.height() as usize,
			ColorSpace::RGBA,
		)
	}

	fn convert_to_u8_subpixels(&mut self) -> Result<Vec<u8>> {
		self
			.convert_depth(BitDepth::Eight)
			.map_err(|err| Decode(format!("{err:?}")))?;
		let channels = self.frames_ref()[0].channels_ref(self.colorspace(), false);
		let len: usize = channels.iter().map(|c| c.len()).sum();
		let mut data = vec![0u8; len];
		let len = zune_image::utils::swizzle_channels(channels, &mut data)
			.map_err(|err| Decode(format!("{err:?}")))?;
		data.truncate(len);
		Ok(data)
	}

	fn into_raster(mut self) -> Result<Raster> {
		self
			.convert_color(ColorSpace::RGBA)
			.map_err(|err| Decode(format!("{err:?}")))?;
		let data = self.convert_to_u8_subpixels()?;
		let (width, height) = self.dimensions();
		let (width, height) = (width as u32, height as u32);
		let len = data.len();
		Raster::from_data(width, height, data).ok_or(UnexpectedLength { len, width, height })
	}
}

pub fn encode_png(raster: &Raster) -> Result<Vec<u8>> {
	zune_image::image::Image::from_raster(raster)
		.write_to_vec(ImageFormat::PNG)
		.map_err(|err| Encode(format!("{err:?}")))
}

pub fn decode_png(data: &[u8]) -> Result<Raster> {
	zune_image::image::Image::read(ZCursor::new(data), DecoderOptions::default())
		.map_err(|err| Decode(format!("{err:?}")))?
		.into_raster()
}
