quantity!(KilowattHourRate, suffix: "/kWh", precision: 2);
