//! Type predicates and conversions.

unary_builders! {
    is_number => "is_number";
    is_double => "is_double";
    is_integer => "is_integer";
    is_boolean => "is_boolean";
    is_null => "is_null";
    is_bytes => "is_bytes";
    is_timestamp => "is_timestamp";
    is_date => "is_date";
    is_string => "is_string";
    is_array => "is_array";
    is_object => "is_object";
    is_ref => "is_ref";
    is_set => "is_set";
    is_doc => "is_doc";
    is_lambda => "is_lambda";
    is_collection => "is_collection";
    is_database => "is_database";
    is_index => "is_index";
    is_function => "is_function";
    is_key => "is_key";
    is_token => "is_token";
    is_credentials => "is_credentials";
    is_role => "is_role";
}

unary_builders! {
    to_string => "to_string";
    to_number => "to_number";
    /// Converts an array of `[key, value]` pairs into an object.
    to_object => "to_object";
    /// Converts an object into an array of `[key, value]` pairs.
    to_array => "to_array";
    to_double => "to_double";
    to_integer => "to_integer";
    to_time => "to_time";
    to_date => "to_date";
}
