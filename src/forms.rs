// src/forms.rs
//
// Request body and query decoding plus the listing/auth form models.
// Form models keep raw strings so a rejected submission can be rendered
// back with whatever the user typed.
use crate::api::{Credentials, ListingUpdate, NewAccount, NewListing, PhotoUpload};
use crate::cep::mask_cep;
use crate::errors::ServerError;
use astra::Request;
use multipart::server::Multipart;
use std::collections::HashMap;
use std::io::Read;

pub type Fields = HashMap<String, String>;

pub fn parse_query(req: &Request) -> Fields {
    req.uri()
        .query()
        .map(|q| parse_urlencoded(q.as_bytes()))
        .unwrap_or_default()
}

pub fn parse_urlencoded(bytes: &[u8]) -> Fields {
    url::form_urlencoded::parse(bytes).into_owned().collect()
}

/// Reads the whole request body, refusing anything over `limit` bytes.
pub fn read_body(req: &mut Request, limit: u64) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(limit + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("could not read body: {e}")))?;

    if buf.len() as u64 > limit {
        return Err(ServerError::PayloadTooLarge(format!(
            "request body over {limit} bytes"
        )));
    }
    Ok(buf)
}

pub fn read_form(req: &mut Request, limit: u64) -> Result<Fields, ServerError> {
    let body = read_body(req, limit)?;
    Ok(parse_urlencoded(&body))
}

/// A file part of a multipart submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: Fields,
    pub files: Vec<FilePart>,
}

pub fn multipart_boundary(req: &Request) -> Option<String> {
    let ct = req.headers().get(http::header::CONTENT_TYPE)?.to_str().ok()?;
    let mime: mime::Mime = ct.parse().ok()?;
    if mime.type_() != mime::MULTIPART || mime.subtype() != mime::FORM_DATA {
        return None;
    }
    mime.get_param(mime::BOUNDARY).map(|b| b.as_str().to_string())
}

/// Splits a `multipart/form-data` body into text fields and files.
/// File inputs left empty by the browser (no name, no bytes) are skipped.
pub fn parse_multipart(body: &[u8], boundary: &str) -> Result<MultipartForm, ServerError> {
    let mut mp = Multipart::with_body(body, boundary);
    let mut form = MultipartForm::default();

    while let Some(mut entry) = mp
        .read_entry()
        .map_err(|e| ServerError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        let field = entry.headers.name.to_string();
        let mut data = Vec::new();
        entry
            .data
            .read_to_end(&mut data)
            .map_err(|e| ServerError::BadRequest(format!("malformed multipart field: {e}")))?;

        match entry.headers.filename.clone() {
            Some(file_name) => {
                if file_name.is_empty() && data.is_empty() {
                    continue;
                }
                let content_type = entry
                    .headers
                    .content_type
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());
                form.files.push(FilePart {
                    field,
                    file_name,
                    content_type,
                    bytes: data,
                });
            }
            None => {
                form.fields
                    .insert(field, String::from_utf8_lossy(&data).into_owned());
            }
        }
    }

    Ok(form)
}

fn field(fields: &Fields, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

fn parse_decimal(raw: &str, label: &str) -> Result<f64, String> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Informe um número válido em \"{label}\"."))
}

fn parse_whole(raw: &str, label: &str) -> Result<i64, String> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| format!("Informe um número inteiro em \"{label}\"."))
}

/// Core fields shared by the create and edit forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFields {
    pub name: String,
    pub price: String,
    pub parking_spaces: String,
    pub fee: String,
    pub description: String,
}

impl ListingFields {
    pub fn from_fields(fields: &Fields) -> Self {
        Self {
            name: field(fields, "nome"),
            price: field(fields, "valor"),
            parking_spaces: field(fields, "vagas"),
            fee: field(fields, "taxa"),
            description: field(fields, "descricao"),
        }
    }

    pub fn from_listing(listing: &crate::api::Listing) -> Self {
        Self {
            name: listing.name.clone().unwrap_or_default(),
            price: listing.price.map(|v| v.to_string()).unwrap_or_default(),
            parking_spaces: listing
                .parking_spaces
                .map(|v| v.to_string())
                .unwrap_or_default(),
            fee: listing.fee.map(|v| v.to_string()).unwrap_or_default(),
            description: listing.description.clone().unwrap_or_default(),
        }
    }

    pub fn to_update(&self) -> Result<ListingUpdate, String> {
        Ok(ListingUpdate {
            name: self.name.trim().to_string(),
            price: parse_decimal(&self.price, "Valor")?,
            parking_spaces: parse_whole(&self.parking_spaces, "Vagas")?,
            fee: parse_decimal(&self.fee, "Taxa")?,
            description: self.description.clone(),
        })
    }
}

/// Address block of the create form. Also the shape the address lookup
/// partial renders back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressFields {
    pub cep: String,
    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

impl AddressFields {
    pub fn from_fields(fields: &Fields) -> Self {
        Self {
            cep: mask_cep(&field(fields, "cep")),
            street: field(fields, "logradouro"),
            number: field(fields, "number"),
            complement: field(fields, "complement"),
            neighborhood: field(fields, "neighborhood"),
            city: field(fields, "city"),
            state: field(fields, "state").trim().chars().take(2).collect(),
        }
    }

    /// Overwrites the parts a postal-code lookup knows about.
    pub fn fill_from(&mut self, address: &crate::cep::Address) {
        self.street = address.street.clone();
        self.neighborhood = address.neighborhood.clone();
        self.city = address.city.clone();
        self.state = address.state.clone();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewListingForm {
    pub listing: ListingFields,
    pub address: AddressFields,
}

impl NewListingForm {
    pub fn from_fields(fields: &Fields) -> Self {
        Self {
            listing: ListingFields::from_fields(fields),
            address: AddressFields::from_fields(fields),
        }
    }

    pub fn to_payload(&self) -> Result<NewListing, String> {
        let core = self.listing.to_update()?;
        Ok(NewListing {
            name: core.name,
            price: core.price,
            parking_spaces: core.parking_spaces,
            fee: core.fee,
            description: core.description,
            cep: self.address.cep.clone(),
            street: self.address.street.clone(),
            complement: self.address.complement.clone(),
            number: self.address.number.clone(),
            neighborhood: self.address.neighborhood.clone(),
            city: self.address.city.clone(),
            state: self.address.state.clone(),
        })
    }
}

/// Rejects the first photo over `max_bytes`, naming it in the message.
pub fn check_photo_sizes(files: &[FilePart], max_bytes: u64) -> Result<(), String> {
    match files.iter().find(|f| f.bytes.len() as u64 > max_bytes) {
        Some(big) => Err(format!(
            "O arquivo \"{}\" é muito grande! O limite é de {}MB por arquivo.",
            big.file_name,
            max_bytes / (1024 * 1024)
        )),
        None => Ok(()),
    }
}

pub fn into_uploads(files: Vec<FilePart>) -> Vec<PhotoUpload> {
    files
        .into_iter()
        .filter(|f| f.field == "files")
        .map(|f| PhotoUpload {
            file_name: f.file_name,
            content_type: f.content_type,
            bytes: f.bytes,
        })
        .collect()
}

pub fn credentials(fields: &Fields) -> Credentials {
    Credentials {
        email: field(fields, "email").trim().to_string(),
        password: field(fields, "password"),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub role: String,
    password: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            cpf: String::new(),
            phone: String::new(),
            role: "TENANT".to_string(),
            password: String::new(),
        }
    }
}

impl RegisterForm {
    pub fn from_fields(fields: &Fields) -> Self {
        let role = match field(fields, "role").as_str() {
            "LANDLORD" => "LANDLORD",
            _ => "TENANT",
        };
        Self {
            name: field(fields, "name").trim().to_string(),
            email: field(fields, "email").trim().to_string(),
            cpf: field(fields, "cpf").trim().to_string(),
            phone: field(fields, "phone").trim().to_string(),
            role: role.to_string(),
            password: field(fields, "password"),
        }
    }

    pub fn to_account(&self) -> NewAccount {
        NewAccount {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            cpf: self.cpf.clone(),
            phone: self.phone.clone(),
            role: self.role.clone(),
        }
    }
}
