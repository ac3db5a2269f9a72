mod numeric_properties;
