mod test_from_yaml;
