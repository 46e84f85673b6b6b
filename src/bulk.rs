use std::io::Read;

use crate::answers::{AnswerValue, SurveyAnswer};
use crate::tables::RENEWABLE_ENERGY_KEY;
use crate::Error;

/// Reads survey answers from a headed CSV.
///
/// The first column is the respondent id; every other header is an answer
/// key. Empty cells are unanswered questions.
///
/// ```csv
/// id,dietType,airTravelFreq,electricityUnits,renewableEnergy
/// a-1,vegan,never,low,true
/// a-2,omnivore,,high,
/// ```
pub fn read_bulk<R: Read>(reader: R) -> impl Iterator<Item = Result<(String, SurveyAnswer), Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let (headers, error) = match reader.headers() {
        Ok(headers) => (headers.clone(), None),
        Err(e) => (csv::StringRecord::new(), Some(Error::from(e))),
    };
    let limit = if error.is_some() { 0 } else { usize::MAX };
    let records = reader
        .into_records()
        .take(limit)
        .enumerate()
        .map(move |(index, record)| {
            // header is line 1
            let row = index + 2;
            record
                .map_err(Error::from)
                .and_then(|record| to_answers(row, &headers, &record))
        });
    error.map(Err).into_iter().chain(records)
}

fn to_answers(
    row: usize,
    headers: &csv::StringRecord,
    record: &csv::StringRecord,
) -> Result<(String, SurveyAnswer), Error> {
    let id = match record.get(0) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(Error::MissingId { row }),
    };
    let mut answers = SurveyAnswer::new();
    for (key, value) in headers.iter().zip(record.iter()).skip(1) {
        if value.is_empty() {
            continue;
        }
        let value = match (key, value) {
            (RENEWABLE_ENERGY_KEY, "true") => AnswerValue::Flag(true),
            (RENEWABLE_ENERGY_KEY, "false") => AnswerValue::Flag(false),
            (_, value) => AnswerValue::Text(value.to_string()),
        };
        answers.insert(key, value);
    }
    Ok((id, answers))
}
