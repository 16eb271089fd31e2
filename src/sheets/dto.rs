use super::api::FetchError;
use crate::catalog::model::{Catalog, Category, Coerce, EventRecord, EventType, Region, Status};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

const COLUMN_NAME: usize = 0;
const COLUMN_DATE: usize = 1;
const COLUMN_LOCATION: usize = 2;
const COLUMN_ENTRY_FEE: usize = 3;
const COLUMN_DESCRIPTION: usize = 4;
const COLUMN_WEBSITE: usize = 5;
const COLUMN_CATEGORY: usize = 6;
const COLUMN_REGION: usize = 7;
const COLUMN_STATUS: usize = 8;
const COLUMN_TYPE: usize = 9;

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuesResponse {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub major_dimension: Option<String>,
    // Note: Sheets omits `values` entirely when the range is empty
    #[serde(default, deserialize_with = "deserialize_rows")]
    pub values: Option<Vec<Vec<String>>>,
}

impl ValuesResponse {
    /// Data rows, i.e. everything after the header.
    /// `None` when there's no grid or the grid has no data row.
    pub fn data_rows(&self) -> Option<&[Vec<String>]> {
        match &self.values {
            Some(rows) if rows.len() > 1 => Some(&rows[1..]),
            _ => None,
        }
    }

    pub fn to_catalog(&self) -> Result<Catalog, FetchError> {
        let Some(rows) = self.data_rows() else {
            return Err(FetchError::MalformedPayload(format!(
                "expected a header and at least one row, got {} rows",
                self.values.as_ref().map_or(0, Vec::len)
            )));
        };

        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                let id = u32::try_from(index + 1).map_err(|_| {
                    FetchError::MalformedPayload(format!("row {} is past the last usable id", index + 1))
                })?;

                Ok(row_to_record(id, row))
            })
            .collect::<Result<Vec<EventRecord>, FetchError>>()
            .map(Catalog::from)
    }
}

/// Positional binding: the id is the 1-based data row number, so it's only
/// meaningful within one snapshot.
pub fn row_to_record(id: u32, row: &[String]) -> EventRecord {
    let cell = |column: usize| row.get(column).cloned().unwrap_or_default();
    let enum_cell = |column: usize| row.get(column).map(String::as_str).unwrap_or_default();

    EventRecord {
        id,
        name: cell(COLUMN_NAME),
        date: cell(COLUMN_DATE),
        location: cell(COLUMN_LOCATION),
        entry_fee: cell(COLUMN_ENTRY_FEE),
        description: cell(COLUMN_DESCRIPTION),
        website: cell(COLUMN_WEBSITE),
        category: Category::coerce(enum_cell(COLUMN_CATEGORY)),
        region: Region::coerce(enum_cell(COLUMN_REGION)),
        status: Status::coerce(enum_cell(COLUMN_STATUS)),
        event_type: EventType::coerce(enum_cell(COLUMN_TYPE)),
    }
}

fn deserialize_rows<'de, D>(d: D) -> Result<Option<Vec<Vec<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::Null => Ok(None),
        Value::Array(rows) => rows
            .into_iter()
            .map(|row| match row {
                Value::Array(cells) => Ok(cells.into_iter().map(cell_to_string).collect()),
                other => Err(de::Error::custom(format!("expected a row array, got {}", other))),
            })
            .collect::<Result<Vec<Vec<String>>, D::Error>>()
            .map(Some),
        other => Err(de::Error::custom(format!(
            "expected an array of rows, got {}",
            other
        ))),
    }
}

// Formatted values are strings, but unformatted ranges can hand back numbers and booleans
fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ValuesResponse {
        serde_json::from_str::<ValuesResponse>(json).unwrap()
    }

    #[test_log::test]
    fn should_map_columns_positionally() {
        let response = parse(
            r##"{
              "range": "Events!A1:J3",
              "majorDimension": "ROWS",
              "values": [
                ["Name", "Date", "Location", "Fee", "Description", "Website", "Category", "Region", "Status", "Type"],
                ["Winterlude", "Feb 2025", "Ottawa, ON", "Free", "Ice sculptures", "https://winterlude.ca", "Winter", "Ottawa", "confirmed", "festival"],
                ["Poutine Fest", "May 2025", "Montreal, QC", "$10", "Cheese curds", "", "Food", "Montreal", "tentative", "activity"]
              ]
            }"##,
        );

        let catalog = response.to_catalog().unwrap();

        assert_eq!(catalog.len(), 2);

        let first = &catalog[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Winterlude");
        assert_eq!(first.date, "Feb 2025");
        assert_eq!(first.location, "Ottawa, ON");
        assert_eq!(first.entry_fee, "Free");
        assert_eq!(first.description, "Ice sculptures");
        assert_eq!(first.website, "https://winterlude.ca");
        assert_eq!(first.category, Category::Winter);
        assert_eq!(first.region, Region::Ottawa);
        assert_eq!(first.status, Status::Confirmed);
        assert_eq!(first.event_type, EventType::Festival);

        let second = &catalog[1];
        assert_eq!(second.id, 2);
        assert_eq!(second.website, "");
        assert_eq!(second.event_type, EventType::Activity);
    }

    #[test_log::test]
    fn when_trailing_cells_are_missing_should_default_them() {
        let response = parse(
            r##"{ "values": [
                ["header"],
                ["Only a name", "Some date"]
            ]}"##,
        );

        let catalog = response.to_catalog().unwrap();
        let event = &catalog[0];

        assert_eq!(event.name, "Only a name");
        assert_eq!(event.location, "");
        assert_eq!(event.category, Category::Cultural);
        assert_eq!(event.region, Region::Ontario);
        assert_eq!(event.status, Status::Tba);
        assert_eq!(event.event_type, EventType::Festival);
    }

    #[test_log::test]
    fn when_status_is_garbage_should_be_tba() {
        let response = parse(
            r##"{ "values": [
                ["header"],
                ["X", "", "", "", "", "", "Music", "Quebec", "sold out!", ""]
            ]}"##,
        );

        let catalog = response.to_catalog().unwrap();
        let event = &catalog[0];

        assert_eq!(event.status, Status::Tba);
        assert_eq!(event.event_type, EventType::Festival);
        assert_eq!(event.category, Category::Music);
        assert_eq!(event.region, Region::Quebec);
    }

    #[test_log::test]
    fn should_render_non_string_cells_as_text() {
        let response = parse(r##"{ "values": [["h"], ["Festival", 2025, null, true]] }"##);

        let catalog = response.to_catalog().unwrap();
        let event = &catalog[0];

        assert_eq!(event.date, "2025");
        assert_eq!(event.location, "");
        assert_eq!(event.entry_fee, "true");
    }

    #[test_log::test]
    fn when_there_is_only_a_header_should_be_malformed() {
        let response = parse(r##"{ "values": [["Name", "Date"]] }"##);

        assert!(matches!(
            response.to_catalog(),
            Err(FetchError::MalformedPayload(_))
        ));
    }

    #[test_log::test]
    fn when_values_are_missing_should_be_malformed() {
        let response = parse(r##"{ "range": "Events!A1:J1", "majorDimension": "ROWS" }"##);

        assert!(matches!(
            response.to_catalog(),
            Err(FetchError::MalformedPayload(_))
        ));
    }

    #[test_log::test]
    fn should_use_the_given_id() {
        let row = vec!["Last row".to_string()];

        let event = row_to_record(u32::MAX, &row);

        assert_eq!(event.id, u32::MAX);
        assert_eq!(event.name, "Last row");
    }

    #[test_log::test]
    fn when_a_row_is_not_an_array_should_fail_to_deserialize() {
        let result = serde_json::from_str::<ValuesResponse>(r##"{ "values": [["h"], "oops"] }"##);

        assert!(result.is_err());
    }
}
