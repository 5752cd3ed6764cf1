use std::fs::File;
use std::io::{BufReader, Read};

use flate2::read::GzDecoder;
use ndarray::{Array1, Array2};

const IMAGES_MAGIC: u32 = 2051;
const LABELS_MAGIC: u32 = 2049;

/// MNIST images and labels loaded from IDX files.
///
/// Images are flattened to (n, rows * cols) with pixels normalized to [0, 1];
/// labels stay as raw class indices.
#[derive(Debug)]
pub struct MnistData {
    pub images: Array2<f64>,
    pub labels: Array1<u8>,
}

impl MnistData {
    pub fn load_from_files(
        images_path: &str,
        labels_path: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let images = Self::load_images(images_path)?;
        let labels = Self::load_labels(labels_path)?;

        if images.nrows() != labels.len() {
            return Err(format!(
                "Number of images ({}) and labels ({}) don't match",
                images.nrows(),
                labels.len()
            )
            .into());
        }

        Ok(MnistData { images, labels })
    }

    pub fn load_images(path: &str) -> Result<Array2<f64>, Box<dyn std::error::Error>> {
        let mut reader = open_idx(path)?;

        let magic = read_u32(&mut reader).map_err(|e| format!("Failed to read magic number: {}", e))?;
        if magic != IMAGES_MAGIC {
            return Err(format!(
                "Invalid magic number for images: {} (expected {})",
                magic, IMAGES_MAGIC
            )
            .into());
        }

        let num_images =
            read_u32(&mut reader).map_err(|e| format!("Failed to read number of images: {}", e))? as usize;
        let rows = read_u32(&mut reader).map_err(|e| format!("Failed to read image rows: {}", e))? as usize;
        let cols = read_u32(&mut reader).map_err(|e| format!("Failed to read image cols: {}", e))? as usize;

        let image_size = rows * cols;
        let mut raw = vec![0u8; num_images * image_size];
        reader
            .read_exact(&mut raw)
            .map_err(|e| format!("Failed to read image data: {}", e))?;

        let data: Vec<f64> = raw.iter().map(|&pixel| pixel as f64 / 255.0).collect();
        let images = Array2::from_shape_vec((num_images, image_size), data)?;
        Ok(images)
    }

    pub fn load_labels(path: &str) -> Result<Array1<u8>, Box<dyn std::error::Error>> {
        let mut reader = open_idx(path)?;

        let magic = read_u32(&mut reader).map_err(|e| format!("Failed to read magic number: {}", e))?;
        if magic != LABELS_MAGIC {
            return Err(format!(
                "Invalid magic number for labels: {} (expected {})",
                magic, LABELS_MAGIC
            )
            .into());
        }

        let num_labels =
            read_u32(&mut reader).map_err(|e| format!("Failed to read number of labels: {}", e))? as usize;

        let mut labels = vec![0u8; num_labels];
        reader
            .read_exact(&mut labels)
            .map_err(|e| format!("Failed to read labels: {}", e))?;

        Ok(Array1::from_vec(labels))
    }
}

fn open_idx(path: &str) -> Result<Box<dyn Read>, Box<dyn std::error::Error>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file '{}': {}", path, e))?;
    let reader = BufReader::new(file);

    Ok(if path.ends_with(".gz") {
        Box::new(GzDecoder::new(reader))
    } else {
        Box::new(reader)
    })
}

fn read_u32(reader: &mut impl Read) -> std::io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}
