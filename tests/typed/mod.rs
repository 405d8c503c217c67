mod tests_typed_consistency;
