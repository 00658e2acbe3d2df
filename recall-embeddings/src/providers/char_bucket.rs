//! Deterministic stub provider.
//!
//! Buckets character codes into a fixed number of dimensions and
//! L2-normalizes the counts. No network, no model, never fails. Texts that
//! share characters score close together, which is enough for tests and
//! air-gapped setups.

use recall_core::errors::RecallResult;
use recall_core::traits::IEmbeddingProvider;

pub struct CharBucketProvider {
    dimensions: usize,
}

impl CharBucketProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn bucket_vector(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        if self.dimensions == 0 {
            return vec;
        }
        for c in text.chars() {
            vec[(c as u32 as usize) % self.dimensions] += 1.0;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for CharBucketProvider {
    fn embed(&self, text: &str) -> RecallResult<Vec<f32>> {
        Ok(self.bucket_vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "char-bucket-stub"
    }
}
