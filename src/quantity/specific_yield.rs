//! Energy yield per unit of installed capacity.

quantity!(SpecificYield, suffix: "kWh/kWp", precision: 1);
