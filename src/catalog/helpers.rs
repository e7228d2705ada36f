//! Catalog record mapping
//!
//! Converts between raw store records and [`CatalogItem`]. Decoding is strict:
//! every field must be present with the expected attribute kind, and nothing
//! is coerced or skipped.

use super::models::CatalogItem;
use crate::access::schema::*;
use crate::access::AccessError;
use crate::store::{AttributeValue, Record};

fn required_string(record: &Record, field: &str) -> Result<String, AccessError> {
    match record.get(field) {
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        Some(AttributeValue::N(_)) => Err(AccessError::malformed(field, "is a number, expected a string")),
        None => Err(AccessError::malformed(field, "is missing")),
    }
}

fn required_price(record: &Record) -> Result<u64, AccessError> {
    let raw = record
        .get(ATTR_PRICE)
        .ok_or_else(|| AccessError::malformed(ATTR_PRICE, "is missing"))?
        .as_n()
        .ok_or_else(|| AccessError::malformed(ATTR_PRICE, "is a string, expected a number"))?;

    raw.parse::<u64>().map_err(|_| {
        AccessError::malformed(ATTR_PRICE, format!("{:?} is not a non-negative integer", raw))
    })
}

/// Decodes one catalog record.
pub fn decode_item(record: &Record) -> Result<CatalogItem, AccessError> {
    Ok(CatalogItem {
        item_id: required_string(record, ITEM_KEY)?,
        name: required_string(record, ATTR_NAME)?,
        description: required_string(record, ATTR_DESCRIPTION)?,
        price: required_price(record)?,
        category: required_string(record, ATTR_CATEGORY)?,
        thumb_image_uri: required_string(record, ATTR_THUMB_IMAGE_URI)?,
        profile_image_uri: required_string(record, ATTR_PROFILE_IMAGE_URI)?,
    })
}

/// Decodes every record, failing on the first malformed one.
pub fn decode_items(records: &[Record]) -> Result<Vec<CatalogItem>, AccessError> {
    records.iter().map(decode_item).collect()
}

/// Encodes an item in the catalog table's attribute layout.
pub fn encode_item(item: &CatalogItem) -> Record {
    let s = |v: &str| AttributeValue::S(v.to_string());
    Record::from([
        (ITEM_KEY.to_string(), s(&item.item_id)),
        (ATTR_NAME.to_string(), s(&item.name)),
        (ATTR_DESCRIPTION.to_string(), s(&item.description)),
        (ATTR_PRICE.to_string(), AttributeValue::N(item.price.to_string())),
        (ATTR_CATEGORY.to_string(), s(&item.category)),
        (ATTR_THUMB_IMAGE_URI.to_string(), s(&item.thumb_image_uri)),
        (ATTR_PROFILE_IMAGE_URI.to_string(), s(&item.profile_image_uri)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> CatalogItem {
        CatalogItem {
            item_id: "i1".into(),
            name: "Widget".into(),
            description: "d".into(),
            price: 500,
            category: "tools".into(),
            thumb_image_uri: "u1".into(),
            profile_image_uri: "u2".into(),
        }
    }

    fn assert_malformed(record: &Record, expected_field: &str) {
        match decode_item(record) {
            Err(AccessError::MalformedRecord { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected malformed {}, got {:?}", expected_field, other),
        }
    }

    #[test]
    fn test_decode_encoded_item() {
        let record = encode_item(&widget());
        assert_eq!(record[ATTR_PRICE], AttributeValue::N("500".into()));
        assert_eq!(decode_item(&record).unwrap(), widget());
    }

    #[test]
    fn test_every_field_is_required() {
        for field in [
            ITEM_KEY,
            ATTR_NAME,
            ATTR_DESCRIPTION,
            ATTR_PRICE,
            ATTR_CATEGORY,
            ATTR_THUMB_IMAGE_URI,
            ATTR_PROFILE_IMAGE_URI,
        ] {
            let mut record = encode_item(&widget());
            record.remove(field);
            assert_malformed(&record, field);
        }
    }

    #[test]
    fn test_wrong_attribute_kinds_are_rejected() {
        let mut record = encode_item(&widget());
        record.insert(ATTR_NAME.into(), AttributeValue::N("7".into()));
        assert_malformed(&record, ATTR_NAME);

        let mut record = encode_item(&widget());
        record.insert(ATTR_PRICE.into(), AttributeValue::S("500".into()));
        assert_malformed(&record, ATTR_PRICE);
    }

    #[test]
    fn test_price_must_be_a_non_negative_integer() {
        for bad in ["abc", "-5", "12.5", ""] {
            let mut record = encode_item(&widget());
            record.insert(ATTR_PRICE.into(), AttributeValue::N(bad.into()));
            assert_malformed(&record, ATTR_PRICE);
        }
    }

    #[test]
    fn test_extra_attributes_are_ignored() {
        let mut record = encode_item(&widget());
        record.insert("Stock".into(), AttributeValue::N("3".into()));
        assert_eq!(decode_item(&record).unwrap(), widget());
    }

    #[test]
    fn test_decode_items_fails_on_any_bad_record() {
        let good = encode_item(&widget());
        let mut bad = encode_item(&widget());
        bad.remove(ATTR_CATEGORY);

        assert_eq!(decode_items(&[good.clone()]).unwrap().len(), 1);
        assert!(decode_items(&[good, bad]).is_err());
    }
}
