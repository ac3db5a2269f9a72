mod accrual_properties;
