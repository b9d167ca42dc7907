use serde::{Deserialize, Deserializer, Serialize};

// Listing shape as returned by the backend. Older revisions used
// Portuguese keys (`nome`, `valor`, ...), newer ones English keys with
// structured address fields; both decode into the same struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Listing {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,

    #[serde(alias = "nome")]
    pub name: Option<String>,
    #[serde(alias = "valor", alias = "value")]
    pub price: Option<f64>,
    #[serde(alias = "taxa")]
    pub fee: Option<f64>,
    #[serde(alias = "vagas", alias = "parkingSpaces")]
    pub parking_spaces: Option<i64>,
    #[serde(alias = "descricao")]
    pub description: Option<String>,
    #[serde(alias = "tamanho")]
    pub size: Option<f64>,

    #[serde(alias = "endereco")]
    pub address: Option<String>,
    pub cep: Option<String>,
    #[serde(alias = "logradouro")]
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,

    pub amenities: Vec<String>,
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Photo {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl Listing {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    pub fn fee_or_zero(&self) -> f64 {
        self.fee.unwrap_or(0.0)
    }

    /// Free-text address when the backend sent one, otherwise one built
    /// from the structured fields.
    pub fn full_address(&self) -> Option<String> {
        if let Some(addr) = non_blank(&self.address) {
            return Some(addr.to_string());
        }

        let mut street = String::new();
        if let Some(s) = non_blank(&self.street) {
            street.push_str(s);
            if let Some(n) = non_blank(&self.number) {
                street.push_str(", ");
                street.push_str(n);
            }
            if let Some(c) = non_blank(&self.complement) {
                street.push_str(" - ");
                street.push_str(c);
            }
        }

        let city_state = match (non_blank(&self.city), non_blank(&self.state)) {
            (Some(c), Some(s)) => Some(format!("{c}/{s}")),
            (Some(c), None) => Some(c.to_string()),
            (None, Some(s)) => Some(s.to_string()),
            (None, None) => None,
        };

        let parts: Vec<String> = [
            Some(street).filter(|s| !s.is_empty()),
            non_blank(&self.neighborhood).map(str::to_string),
            city_state,
            non_blank(&self.cep).map(|c| format!("CEP {c}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" - "))
        }
    }
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Backend ids arrive as numbers or strings depending on the revision.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
        Float(f64),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Int(n)) => n.to_string(),
        Some(RawId::Text(s)) => s,
        Some(RawId::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

/// Filters accepted by the search endpoint. Empty filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub cep: String,
    pub min: String,
    pub max: String,
}

impl SearchQuery {
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        [("cep", &self.cep), ("min", &self.min), ("max", &self.max)]
            .into_iter()
            .map(|(k, v)| (k, v.trim()))
            .filter(|(_, v)| !v.is_empty())
            .collect()
    }
}

/// JSON part sent as `kitnet` when creating a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewListing {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "valor")]
    pub price: f64,
    #[serde(rename = "vagas")]
    pub parking_spaces: i64,
    #[serde(rename = "taxa")]
    pub fee: f64,
    #[serde(rename = "descricao")]
    pub description: String,
    pub cep: String,
    #[serde(rename = "logradouro")]
    pub street: String,
    pub complement: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// JSON body of `PUT /api/kitnets/{id}`. Address and photos are not editable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingUpdate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "valor")]
    pub price: f64,
    #[serde(rename = "vagas")]
    pub parking_spaces: i64,
    #[serde(rename = "taxa")]
    pub fee: f64,
    #[serde(rename = "descricao")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub cpf: String,
    pub phone: String,
    pub role: String,
}
