mod collection;
mod kind;
mod params;
mod range;
mod regex;
mod string;
