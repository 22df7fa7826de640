mod local_axis;
mod near_degenerate;
mod partition_properties;
mod partition_triangle;
