use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

#[extend::ext(name = PathExt)]
pub impl Path {
  /// Opens and deserializes a JSON file.
  ///
  /// # Errors
  ///
  /// This will return an error if:
  /// - the file cannot be opened.
  /// - the contents do not deserialize into `T`.
  fn read_json<T: DeserializeOwned>(&self) -> Result<T> {
    let file = File::open(self).with_context(|| format!("open {self:?}"))?;

    serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parse {self:?}"))
  }
}
