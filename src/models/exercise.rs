// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::ApiResponse;

/// Catalog exercise from `esercizi.php`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "nome", default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "descrizione", default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(rename = "immagine_url", default, deserialize_with = "lenient::opt_text")]
    pub image_url: Option<String>,
    #[serde(rename = "gruppo_muscolare", default, deserialize_with = "lenient::opt_text")]
    pub muscle_group: Option<String>,
    #[serde(rename = "attrezzatura", default, deserialize_with = "lenient::opt_text")]
    pub equipment: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_isometric: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub status: Option<String>,
}

impl ApiResponse for Exercise {
    fn is_success(&self) -> bool {
        true
    }

    fn message(&self) -> Option<&str> {
        None
    }
}
