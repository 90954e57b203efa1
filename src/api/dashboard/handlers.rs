//! Canned demo payloads for the dashboard: demo patient data, chart data,
//! and patient summaries. These are static by design; only the timestamps
//! are live.

use axum::{Json, extract::Path, extract::Query};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub struct ChartParams {
    #[serde(default = "default_chart_type")]
    pub chart_type: String,
}

fn default_chart_type() -> String {
    "blood_work".to_string()
}

/// Demo patient record used by the dashboard before any real data exists.
pub async fn demo_data_handler() -> Json<Value> {
    Json(json!({
        "patient": {
            "id": "demo-patient-001",
            "name": "John Doe",
            "age": 45,
            "gender": "male",
            "blood_type": "O+",
            "height_cm": 175,
            "weight_kg": 80,
            "allergies": ["Penicillin"],
            "chronic_conditions": ["Type 2 Diabetes", "Hypertension"],
            "emergency_contact": {
                "name": "Jane Doe",
                "relationship": "Spouse",
                "phone": "+1-555-0123"
            }
        },
        "lab_results": {
            "glucose": 145,
            "hba1c": 6.8,
            "cholesterol": 220,
            "ldl": 140,
            "hdl": 42,
            "triglycerides": 185,
            "creatinine": 1.1,
            "sodium": 140,
            "potassium": 4.2
        },
        "medications": [
            {
                "name": "Metformin",
                "dosage": "500mg",
                "frequency": "Twice daily",
                "instructions": "Take with meals",
                "status": "active"
            },
            {
                "name": "Lisinopril",
                "dosage": "10mg",
                "frequency": "Once daily",
                "instructions": "Take in the morning",
                "status": "active"
            }
        ],
        "vitals": {
            "blood_pressure": {"systolic": 135, "diastolic": 85},
            "heart_rate": 72,
            "temperature": 98.6,
            "respiratory_rate": 16,
            "oxygen_saturation": 98
        },
        "appointments": [
            {
                "date": "2024-02-15T10:00:00",
                "doctor": "Dr. Smith",
                "reason": "Diabetes follow-up",
                "status": "scheduled"
            }
        ],
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// Canned analysis of the demo lab results.
pub async fn demo_analyze_handler() -> Json<Value> {
    Json(json!({
        "analysis": "Based on the demo lab results, your glucose and cholesterol levels are elevated. This indicates a need for lifestyle modifications and possibly medication adjustment.",
        "recommendations": [
            "Follow up with your endocrinologist",
            "Monitor blood sugar regularly",
            "Maintain heart-healthy diet",
            "Exercise 30 minutes daily"
        ],
        "risk_level": "moderate",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// Chart payload for the requested type; unknown types fall back to the
/// blood-work chart.
pub async fn chart_handler(Query(params): Query<ChartParams>) -> Json<Value> {
    let blood_work = json!({
        "type": "bar",
        "title": "Blood Work Analysis",
        "data": {
            "labels": ["Glucose", "Cholesterol", "HDL", "LDL", "Triglycerides"],
            "values": [145, 220, 42, 140, 185],
            "reference_ranges": {
                "glucose": [70, 100],
                "cholesterol": [125, 200],
                "hdl": [40, 60],
                "ldl": [0, 100],
                "triglycerides": [0, 150]
            }
        },
        "colors": ["#EF4444", "#F59E0B", "#10B981", "#F59E0B", "#EF4444"]
    });

    let chart_data = match params.chart_type.as_str() {
        "vitals" => json!({
            "type": "gauge",
            "title": "Vital Signs",
            "data": {
                "heart_rate": {"value": 72, "min": 60, "max": 100},
                "blood_pressure": {"systolic": 135, "diastolic": 85},
                "temperature": {"value": 98.6, "min": 97, "max": 99}
            }
        }),
        _ => blood_work,
    };

    Json(json!({
        "chart_type": params.chart_type,
        "chart_data": chart_data,
        "generated_at": Utc::now().to_rfc3339()
    }))
}

/// Demo health summary for a patient.
pub async fn patient_summary_handler(Path(patient_id): Path<String>) -> Json<Value> {
    Json(json!({
        "patient_id": patient_id,
        "summary": {
            "health_score": 78,
            "risk_level": "moderate",
            "conditions": ["Type 2 Diabetes", "Hypertension"],
            "medications_count": 2,
            "lab_reports_count": 3,
            "last_checkup": "2024-01-15",
            "next_appointment": "2024-02-15"
        },
        "trends": {
            "glucose": "slightly improving",
            "cholesterol": "stable",
            "blood_pressure": "improving"
        },
        "recommendations": [
            "Continue current medications",
            "Monitor blood sugar daily",
            "Follow up with cardiologist",
            "Maintain low-salt diet"
        ],
        "generated_at": Utc::now().to_rfc3339()
    }))
}
