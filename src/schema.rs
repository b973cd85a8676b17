diesel::table! {
    appointments (id) {
        id -> Integer,
        patient_name -> Text,
        doctor_name -> Nullable<Text>,
        date -> Nullable<Text>,
        time -> Nullable<Text>,
        problem -> Text,
        report -> Nullable<Text>,
        suggestion -> Nullable<Text>,
        medicine -> Nullable<Text>,
        ai_analysis -> Nullable<Text>,
    }
}

diesel::table! {
    doctors (id) {
        id -> Integer,
        name -> Text,
        specialization -> Text,
        password -> Text,
    }
}

diesel::table! {
    patients (id) {
        id -> Integer,
        name -> Text,
        email -> Text,
        password -> Text,
    }
}

diesel::table! {
    sessions (token) {
        token -> Text,
        role -> Text,
        name -> Text,
        login_time -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(appointments, doctors, patients, sessions,);
