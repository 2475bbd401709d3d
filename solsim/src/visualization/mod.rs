pub mod sink;
pub mod gnuplot;
