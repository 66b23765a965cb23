pub mod pvgis;
