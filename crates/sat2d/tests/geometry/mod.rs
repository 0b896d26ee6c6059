mod point_containment;
mod polygon_construction;
