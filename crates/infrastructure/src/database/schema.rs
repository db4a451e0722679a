// Database schema for the employee service
diesel::table! {
    employees (id) {
        id -> BigInt,
        first_name -> Text,
        last_name -> Text,
        email -> Text,        // unique by service rule, not by constraint
    }
}
