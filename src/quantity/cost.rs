quantity!(Cost, suffix: "", precision: 0);
