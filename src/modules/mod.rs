pub mod callnumber;
