use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};

/// Slices a dataset into contiguous mini-batches in fixed sequential order.
///
/// Produces `ceil(n / batch_size)` batches; the last one may be shorter.
/// No shuffling. A batch size of zero is not handled.
pub struct BatchGenerator<'a> {
    images: &'a Array2<f64>,
    labels: &'a Array1<u8>,
    batch_size: usize,
    index: usize,
    pub num_batches: usize,
}

impl<'a> BatchGenerator<'a> {
    pub fn new(images: &'a Array2<f64>, labels: &'a Array1<u8>, batch_size: usize) -> Self {
        assert_eq!(
            images.nrows(),
            labels.len(),
            "images and labels length mismatch: {} vs {}",
            images.nrows(),
            labels.len()
        );
        let n = images.nrows();
        let num_batches = (n + batch_size - 1) / batch_size;
        Self {
            images,
            labels,
            batch_size,
            index: 0,
            num_batches,
        }
    }

    /// Returns the next (images, labels) slice pair, or None once exhausted.
    pub fn next_batch(&mut self) -> Option<(ArrayView2<'a, f64>, ArrayView1<'a, u8>)> {
        let n = self.images.nrows();
        if self.index >= n {
            return None;
        }
        let start = self.index;
        let end = (start + self.batch_size).min(n);
        self.index = end;
        Some((
            self.images.slice(s![start..end, ..]),
            self.labels.slice(s![start..end]),
        ))
    }
}

impl<'a> Iterator for BatchGenerator<'a> {
    type Item = (ArrayView2<'a, f64>, ArrayView1<'a, u8>);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_batch()
    }
}
