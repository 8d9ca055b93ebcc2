//! Synthetic request payloads. No real patient data.

use chrono::{Duration, Utc};
use serde_json::{json, Value};

pub const SCHOOLS_OF_THOUGHT: &[&str] = &[
    "traditional_autologous",
    "biologics",
    "ai_optimized",
    "experimental",
    "hybrid",
];

pub fn patient_record() -> Value {
    let today = Utc::now().date_naive();
    json!({
        "patient_id": format!("SMOKE-{}", Utc::now().format("%Y%m%d%H%M%S")),
        "demographics": {
            "name": "Test Patient",
            "age": 52,
            "gender": "female",
            "date_of_birth": "1973-04-18"
        },
        "medical_history": {
            "conditions": ["Knee osteoarthritis (Kellgren-Lawrence grade 3)", "Mild hypertension"],
            "surgeries": ["Right knee arthroscopic meniscectomy (2015)"],
            "medications": ["Lisinopril 10mg daily", "Ibuprofen 400mg PRN"],
            "allergies": ["Penicillin"]
        },
        "current_symptoms": [
            "Right knee pain when climbing stairs",
            "Morning stiffness lasting 20 minutes",
            "Intermittent swelling after activity"
        ],
        "vital_signs": {
            "blood_pressure": "132/84",
            "heart_rate": 72,
            "bmi": 27.4
        },
        "imaging": {
            "modality": "MRI",
            "date": (today - Duration::days(21)).to_string(),
            "findings": "Medial compartment cartilage thinning, small joint effusion"
        },
        "treatment_goals": "Delay total knee replacement and return to hiking"
    })
}

pub fn analyze_request() -> Value {
    json!({
        "include_differential": true,
        "include_literature": true,
        "focus": "regenerative_options"
    })
}

pub fn protocol_request(school_of_thought: &str) -> Value {
    json!({
        "condition": "Knee osteoarthritis",
        "severity": "moderate",
        "school_of_thought": school_of_thought,
        "patient_profile": {
            "age": 52,
            "activity_level": "moderate",
            "prior_treatments": ["NSAIDs", "Physical therapy", "Corticosteroid injection"]
        },
        "include_evidence": true
    })
}

pub fn diagnostic_query() -> Value {
    json!({
        "symptoms": [
            "Lateral elbow pain worse with gripping",
            "Tenderness over lateral epicondyle",
            "Symptoms for 7 months despite bracing"
        ],
        "patient_context": {
            "age": 44,
            "occupation": "carpenter",
            "dominant_hand": "right"
        },
        "imaging_findings": "Ultrasound shows common extensor tendon thickening with hypoechoic areas",
        "request_regenerative_options": true
    })
}

pub fn literature_query() -> Value {
    json!({
        "query": "platelet-rich plasma knee osteoarthritis randomized",
        "limit": 5
    })
}
