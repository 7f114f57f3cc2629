// SPDX-License-Identifier: MIT

use serde::Deserialize;

use crate::error::{FeedError, FeedResult};

/// One `<Rate>` element, flattened. Codes repeat across records when several
/// countries share a currency; every record of a document carries the same
/// `rate_date`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRateRecord {
    pub currency_code: String,
    pub country: String,
    pub description: String,
    pub rate_value: String,
    pub rate_date: String,
}

#[derive(Debug, Deserialize)]
struct RateDocument {
    #[serde(rename = "Status")]
    status: FeedStatus,
    #[serde(rename = "Rate", default)]
    rates: Vec<RateElement>,
}

#[derive(Debug, Deserialize)]
struct FeedStatus {
    #[serde(rename = "ResultCode")]
    result_code: String,
}

#[derive(Debug, Deserialize)]
struct RateElement {
    #[serde(rename = "CurrencyCode")]
    currency_code: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "CurrencyDescription")]
    description: String,
    #[serde(rename = "CurrencyRate")]
    rate: String,
    #[serde(rename = "RateDate")]
    rate_date: String,
}

const SUCCESS_RESULT_CODE: &str = "0";

/// Parse the upstream XML body into rate records.
///
/// Any malformation — unparsable XML, missing fields, a non-success result
/// code, or an empty rate list — is one error kind; the distinction only
/// matters to the log line.
pub fn decode_feed(body: &str) -> FeedResult<Vec<RawRateRecord>> {
    let document: RateDocument = serde_xml_rs::from_str(body)
        .map_err(|e| FeedError::FeedUnavailable(format!("feed did not parse as XML: {e}")))?;

    if document.status.result_code != SUCCESS_RESULT_CODE {
        return Err(FeedError::FeedUnavailable(format!(
            "feed reported result code {:?}",
            document.status.result_code
        )));
    }
    if document.rates.is_empty() {
        return Err(FeedError::FeedUnavailable(
            "feed contains no rate elements".to_string(),
        ));
    }

    document.rates.into_iter().map(flatten_element).collect()
}

fn flatten_element(element: RateElement) -> FeedResult<RawRateRecord> {
    let record = RawRateRecord {
        currency_code: element.currency_code,
        country: element.country,
        description: element.description,
        rate_value: element.rate,
        rate_date: element.rate_date,
    };
    if record.currency_code.is_empty()
        || record.country.is_empty()
        || record.description.is_empty()
        || record.rate_value.is_empty()
        || record.rate_date.is_empty()
    {
        return Err(FeedError::FeedUnavailable(format!(
            "rate element for {:?} is missing required fields",
            record.currency_code
        )));
    }
    Ok(record)
}

#[cfg(test)]
pub(crate) const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Rates>
  <Rate>
    <Country>Bandaríkin</Country>
    <CurrencyCode>USD</CurrencyCode>
    <CurrencyDescription>dalur, bandarískur</CurrencyDescription>
    <CurrencyRate>138.5</CurrencyRate>
    <RateDate>15.03.2024</RateDate>
  </Rate>
  <Rate>
    <Country>Panama</Country>
    <CurrencyCode>USD</CurrencyCode>
    <CurrencyDescription>dalur, bandarískur</CurrencyDescription>
    <CurrencyRate>138.5</CurrencyRate>
    <RateDate>15.03.2024</RateDate>
  </Rate>
  <Rate>
    <Country>Bretland</Country>
    <CurrencyCode>GBP</CurrencyCode>
    <CurrencyDescription>pund, sterlingspund pund</CurrencyDescription>
    <CurrencyRate>176.2</CurrencyRate>
    <RateDate>15.03.2024</RateDate>
  </Rate>
  <Rate>
    <Country>Danmörk</Country>
    <CurrencyCode>DKK</CurrencyCode>
    <CurrencyDescription>dönsk króna</CurrencyDescription>
    <CurrencyRate>20.1</CurrencyRate>
    <RateDate>15.03.2024</RateDate>
  </Rate>
  <Status>
    <ResultCode>0</ResultCode>
  </Status>
</Rates>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rate_elements() {
        let records = decode_feed(SAMPLE_FEED).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].currency_code, "USD");
        assert_eq!(records[0].country, "Bandaríkin");
        assert_eq!(records[0].description, "dalur, bandarískur");
        assert_eq!(records[0].rate_value, "138.5");
        assert!(records.iter().all(|r| r.rate_date == "15.03.2024"));
    }

    #[test]
    fn non_success_result_code_is_unavailable() {
        let body = r#"<Rates>
            <Rate>
              <Country>Bandaríkin</Country>
              <CurrencyCode>USD</CurrencyCode>
              <CurrencyDescription>dalur, bandarískur</CurrencyDescription>
              <CurrencyRate>138.5</CurrencyRate>
              <RateDate>15.03.2024</RateDate>
            </Rate>
            <Status><ResultCode>13</ResultCode></Status>
        </Rates>"#;
        assert!(matches!(
            decode_feed(body),
            Err(FeedError::FeedUnavailable(_))
        ));
    }

    #[test]
    fn empty_rate_list_is_unavailable() {
        let body = "<Rates><Status><ResultCode>0</ResultCode></Status></Rates>";
        assert!(matches!(
            decode_feed(body),
            Err(FeedError::FeedUnavailable(_))
        ));
    }

    #[test]
    fn unparsable_body_is_unavailable() {
        assert!(matches!(
            decode_feed("not xml at all"),
            Err(FeedError::FeedUnavailable(_))
        ));
    }

    #[test]
    fn missing_status_is_unavailable() {
        let body = r#"<Rates>
            <Rate>
              <Country>Bandaríkin</Country>
              <CurrencyCode>USD</CurrencyCode>
              <CurrencyDescription>dalur, bandarískur</CurrencyDescription>
              <CurrencyRate>138.5</CurrencyRate>
              <RateDate>15.03.2024</RateDate>
            </Rate>
        </Rates>"#;
        assert!(matches!(
            decode_feed(body),
            Err(FeedError::FeedUnavailable(_))
        ));
    }

    #[test]
    fn empty_field_is_unavailable() {
        let body = r#"<Rates>
            <Rate>
              <Country></Country>
              <CurrencyCode>USD</CurrencyCode>
              <CurrencyDescription>dalur, bandarískur</CurrencyDescription>
              <CurrencyRate>138.5</CurrencyRate>
              <RateDate>15.03.2024</RateDate>
            </Rate>
            <Status><ResultCode>0</ResultCode></Status>
        </Rates>"#;
        assert!(matches!(
            decode_feed(body),
            Err(FeedError::FeedUnavailable(_))
        ));
    }
}
