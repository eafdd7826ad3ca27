//! Image XObject creation
//!
//! Segments are embedded as 8-bit DeviceRGB images. PDF images carry no
//! alpha here, so transparent pixels are composited onto white first.

use crate::types::Result;
use image::RgbaImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Embed an RGBA image in the output document as a compressed image XObject.
pub fn create_image_xobject(output: &mut Document, image: &RgbaImage) -> Result<ObjectId> {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(image.width() as i64));
    dict.set("Height", Object::Integer(image.height() as i64));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));

    let mut stream = Stream::new(dict, flatten_onto_white(image));
    stream.compress()?;

    Ok(output.add_object(stream))
}

/// Composite every pixel over an opaque white background.
fn flatten_onto_white(image: &RgbaImage) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(image.width() as usize * image.height() as usize * 3);

    for pixel in image.pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as u16;
        for channel in [r, g, b] {
            let blended = (channel as u16 * alpha + 255 * (255 - alpha)) / 255;
            rgb.push(blended as u8);
        }
    }

    rgb
}
