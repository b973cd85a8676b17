//! Keyword lookup that turns a free-text problem description into a canned
//! diagnosis. Rules are checked in order and the first match wins.

pub const FRACTURE: &str =
    "Possible fracture detected. Keep the area still and get an X-ray at the orthopaedics department.";
pub const VIRAL_INFECTION: &str =
    "Possible viral infection. Monitor your temperature, rest and stay hydrated.";
pub const CARDIAC_ISSUE: &str =
    "Possible cardiac issue. Seek immediate medical attention.";
pub const MIGRAINE_OR_STRESS: &str =
    "Possible migraine or stress-related headache. Rest in a quiet, dark room.";
pub const FURTHER_EVALUATION: &str =
    "No clear match for the symptoms. Further evaluation by a doctor is required.";

pub const MEDICINE_SUGGESTION: &str =
    "Paracetamol may relieve mild symptoms. Consult a doctor before taking any medication.";

const RULES: &[(&str, &str)] = &[
    ("fracture", FRACTURE),
    ("fever", VIRAL_INFECTION),
    ("chest pain", CARDIAC_ISSUE),
    ("headache", MIGRAINE_OR_STRESS),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    pub diagnosis: &'static str,
    pub medicine: &'static str,
}

pub fn classify(problem: &str) -> Analysis {
    let problem = problem.to_lowercase();
    let diagnosis = RULES
        .iter()
        .find(|(keyword, _)| problem.contains(keyword))
        .map_or(FURTHER_EVALUATION, |&(_, diagnosis)| diagnosis);

    Analysis {
        diagnosis,
        medicine: MEDICINE_SUGGESTION,
    }
}
